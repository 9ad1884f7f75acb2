use log::info;
use std::error::Error;
use std::fs;

/// Full contents of the to-do list file, or a fatal error naming the path.
pub fn read_todo_list(path: &str) -> Result<String, Box<dyn Error>> {
    info!("Reading org-mode to-do list from {}", path);
    fs::read_to_string(path).map_err(|e| format!("Could not read {} because: {}", path, e).into())
}

/// Create-or-truncate write of the generated schedule. Re-running on the
/// same day replaces the previous file.
pub fn write_daily_schedule(path: &str, content: &str) -> Result<(), Box<dyn Error>> {
    info!("Writing daily schedule to {}", path);
    fs::write(path, content).map_err(|e| format!("Could not write {} because: {}", path, e).into())
}
