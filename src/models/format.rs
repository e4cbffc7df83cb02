use std::fmt;
use std::path::Path;

use phf::phf_map;

use crate::models::form::Form;

/// 表单文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFormat {
    Json,
    Yaml,
}

/// 扩展名 → 格式（区分大小写）
static FORMATS_BY_EXTENSION: phf::Map<&'static str, FormFormat> = phf_map! {
    "json" => FormFormat::Json,
    "yaml" => FormFormat::Yaml,
    "yml" => FormFormat::Yaml,
};

impl FormFormat {
    /// 根据路径后缀识别格式，未知后缀返回 None
    ///
    /// 按完整路径字符串匹配 `.<ext>` 后缀，因此名为 `.json` 的文件同样可以识别。
    pub fn detect(path: &Path) -> Option<Self> {
        let path = path.to_string_lossy();
        FORMATS_BY_EXTENSION
            .entries()
            .find(|(ext, _)| {
                path.strip_suffix(**ext)
                    .is_some_and(|stem| stem.ends_with('.'))
            })
            .map(|(_, format)| *format)
    }

    /// 将文件原始字节解码为表单
    ///
    /// 编码错误（如非法 UTF-8）与语法错误一样作为解码失败返回。
    pub fn decode(self, content: &[u8]) -> Result<Form, Box<dyn std::error::Error + Send + Sync>> {
        let form = match self {
            FormFormat::Json => serde_json::from_slice(content)?,
            FormFormat::Yaml => serde_yaml::from_slice(content)?,
        };
        Ok(form)
    }

    pub fn name(self) -> &'static str {
        match self {
            FormFormat::Json => "JSON",
            FormFormat::Yaml => "YAML",
        }
    }
}

impl fmt::Display for FormFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(FormFormat::detect(Path::new("survey.json")), Some(FormFormat::Json));
        assert_eq!(FormFormat::detect(Path::new("dir/survey.yaml")), Some(FormFormat::Yaml));
        assert_eq!(FormFormat::detect(Path::new("survey.yml")), Some(FormFormat::Yaml));
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        assert_eq!(FormFormat::detect(Path::new("survey.JSON")), None);
        assert_eq!(FormFormat::detect(Path::new("survey.Yml")), None);
    }

    #[test]
    fn test_detect_unknown_extensions() {
        assert_eq!(FormFormat::detect(Path::new("survey.toml")), None);
        assert_eq!(FormFormat::detect(Path::new("survey.json.bak")), None);
        assert_eq!(FormFormat::detect(Path::new("survey")), None);
        assert_eq!(FormFormat::detect(Path::new("surveyjson")), None);
    }

    #[test]
    fn test_detect_bare_suffix_file_names() {
        assert_eq!(FormFormat::detect(Path::new("dir/.json")), Some(FormFormat::Json));
        assert_eq!(FormFormat::detect(Path::new(".yaml")), Some(FormFormat::Yaml));
        assert_eq!(FormFormat::detect(Path::new("dir/.yml")), Some(FormFormat::Yaml));
    }

    #[test]
    fn test_decode_yaml_ignores_unknown_fields() {
        let yaml = "name: Feedback\nversion: 3\nquestions:\n  - question: Rating\n    options: [good, bad]\n    required: true\n  - question: Notes\n";
        let form = FormFormat::Yaml.decode(yaml.as_bytes()).unwrap();

        assert_eq!(form.name, "Feedback");
        assert_eq!(form.questions.len(), 2);
        assert_eq!(form.questions[0].options, vec!["good", "bad"]);
        assert!(form.questions[0].required);
        assert!(form.questions[1].options.is_empty());
        assert!(!form.questions[1].required);
        assert_eq!(form.questions[1].answer, None);
    }

    #[test]
    fn test_decode_json_ignores_unknown_fields() {
        let json = br#"{"name":"Feedback","version":3,"questions":[{"question":"Rating","hint":"be honest"}]}"#;
        let form = FormFormat::Json.decode(json).unwrap();

        assert_eq!(form.name, "Feedback");
        assert_eq!(form.questions.len(), 1);
        assert_eq!(form.questions[0].text, "Rating");
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(FormFormat::Json.decode(b"{\"name\": ").is_err());
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(FormFormat::Json.decode(b"{\"name\":\"\xff\",\"questions\":[]}").is_err());
        assert!(FormFormat::Yaml.decode(b"name: \xff\n").is_err());
    }
}
