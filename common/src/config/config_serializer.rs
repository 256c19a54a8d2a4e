use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Parse errors name the line and column in the file when known.
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| match e.location() {
            Some(location) => format!(
                "Failed to deserialize config at line {}, column {}: {}",
                location.line(),
                location.column(),
                e
            ),
            None => format!("Failed to deserialize config: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        width: u32,
    }

    #[test]
    fn test_type_mismatch_reports_location() {
        let result: Result<Sample, String> = YamlConfigSerializer::new().deserialize("width: wide\n");
        let message = result.unwrap_err();
        assert!(message.starts_with("Failed to deserialize config"));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn test_serialized_output_reads_back() {
        let serializer = YamlConfigSerializer::new();
        let text = serializer.serialize(&Sample { width: 20 }).unwrap();
        assert!(text.contains("width: 20"));
        let parsed: Sample = serializer.deserialize(&text).unwrap();
        assert_eq!(parsed, Sample { width: 20 });
    }
}
