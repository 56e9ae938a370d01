use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomKitConfig {
    pub enable_logging: bool,
    pub log_level: String,
    /// Retardo (ms) del callback `ready` cuando el documento ya está cargado
    pub ready_delay_ms: u32,
    /// Tratar `readyState == "interactive"` como documento listo
    pub ready_on_interactive: bool,
}

impl Default for DomKitConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            ready_delay_ms: 0,
            ready_on_interactive: false,
        }
    }
}

impl DomKitConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DOMKIT_ENABLE_LOGGING"),
            option_env!("DOMKIT_LOG_LEVEL"),
            option_env!("DOMKIT_READY_DELAY_MS"),
            option_env!("DOMKIT_READY_ON_INTERACTIVE"),
        )
    }

    /// Construye la configuración a partir de valores crudos (None = valor por defecto)
    pub fn from_values(
        enable_logging: Option<&str>,
        log_level: Option<&str>,
        ready_delay_ms: Option<&str>,
        ready_on_interactive: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|v| v.trim().to_lowercase())
                .filter(|v| v.parse::<log::Level>().is_ok())
                .unwrap_or(defaults.log_level),
            ready_delay_ms: ready_delay_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.ready_delay_ms),
            ready_on_interactive: ready_on_interactive
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.ready_on_interactive),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm-logger
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Estados de `document.readyState` que cuentan como "listo"
    pub fn is_ready_state(&self, state: &str) -> bool {
        match state {
            "complete" => true,
            "interactive" => self.ready_on_interactive,
            _ => false,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: DomKitConfig = DomKitConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = DomKitConfig::from_values(None, None, None, None);
        assert_eq!(config, DomKitConfig::default());
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = DomKitConfig::from_values(Some("false"), Some("DEBUG"), Some("15"), Some("true"));
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.level(), log::Level::Debug);
        assert_eq!(config.ready_delay_ms, 15);
        assert!(config.ready_on_interactive);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DomKitConfig::from_values(Some("yes"), Some("loud"), Some("-3"), Some("1"));
        assert_eq!(config, DomKitConfig::default());
    }

    #[test]
    fn test_ready_states() {
        let strict = DomKitConfig::default();
        assert!(strict.is_ready_state("complete"));
        assert!(!strict.is_ready_state("interactive"));
        assert!(!strict.is_ready_state("loading"));

        let eager = DomKitConfig { ready_on_interactive: true, ..DomKitConfig::default() };
        assert!(eager.is_ready_state("interactive"));
    }
}
