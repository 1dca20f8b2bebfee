use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigurationModel {
    #[serde(default)]
    pub ui: UiConfigSection,
    #[serde(default)]
    pub pack: PackConfigSection,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UiConfigSection {
    /// Prompt marker printed before each read. Defaults to `> `.
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackConfigSection {
    /// Compression algorithm name for `compress`/`decompress`.
    pub algorithm: Option<String>,
}
