use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::KakitoriError,
    storage::MemoryStore,
};

const APP_NAME: &str = "kakitori";
const STORE_FILE: &str = "drill_store.json";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), KakitoriError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    println!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(
    filename: &str,
) -> Result<T, KakitoriError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(data)
}

/// Load the local item pool and attempt log, falling back to an empty store
/// when the file is missing or unreadable.
pub fn load_store_or_default() -> MemoryStore {
    match load_json::<MemoryStore>(STORE_FILE) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using empty store.", STORE_FILE, e);
            MemoryStore::new()
        }
    }
}

pub fn save_store(store: &MemoryStore) -> Result<(), KakitoriError> {
    save_json(store, STORE_FILE)
}
