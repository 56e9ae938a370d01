use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables DOMKIT_* desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Solo variables propias, y solo si no están ya definidas
                    if key.starts_with("DOMKIT_") && env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "DOMKIT_ENABLE_LOGGING",
        "DOMKIT_LOG_LEVEL",
        "DOMKIT_READY_DELAY_MS",
        "DOMKIT_READY_ON_INTERACTIVE",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
