use std::env;
use std::fs;

/// Claves que config.rs lee con option_env!
const CONFIG_KEYS: [&str; 8] = [
    "DATASTORE_API_URL",
    "DEBOUNCE_MS",
    "TOAST_DURATION_MS",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "DEFAULT_UNIVERSE_ID",
    "DEFAULT_API_TOKEN",
    "DEFAULT_DATASTORE",
];

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=.env no encontrado, DATASTORE_API_URL=http://localhost:3000 por defecto");
        return;
    };

    // El entorno del proceso gana sobre .env
    for (key, value) in contents.lines().filter_map(parse_env_line) {
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
