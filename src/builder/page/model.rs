use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::Object;
use serde::Deserialize;

use super::formats::PAGE_EXT;

/// One content file, parsed and rendered to HTML.
///
/// The first-class fields mirror the recognised frontmatter keys; any
/// other key lands in `extra` and is handed to templates as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Page {
    pub uri: String,
    pub title: String,
    pub description: String,
    pub template: String,
    pub meta_tags: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,

    /// Body after format conversion
    #[serde(skip)]
    pub content: String,

    /// File the page was parsed from
    #[serde(skip)]
    pub source: PathBuf,
}

impl Page {
    /// Where the page is written under `dst`
    pub fn output_path(&self, dst: &Path) -> PathBuf {
        dst.join(self.uri.trim_start_matches('/'))
    }

    /// The `page` object exposed to templates
    pub fn to_liquid(&self) -> Result<Object, liquid::Error> {
        let meta_tags = self
            .meta_tags
            .iter()
            .map(|(name, content)| {
                let mut tag = Object::new();
                tag.insert("name".into(), Value::scalar(name.clone()));
                tag.insert("content".into(), Value::scalar(content.clone()));
                Value::Object(tag)
            })
            .collect::<Vec<Value>>();

        let mut obj = Object::new();
        obj.insert("uri".into(), Value::scalar(self.uri.clone()));
        obj.insert("title".into(), Value::scalar(self.title.clone()));
        obj.insert("description".into(), Value::scalar(self.description.clone()));
        obj.insert("template".into(), Value::scalar(self.template.clone()));
        obj.insert("content".into(), Value::scalar(self.content.clone()));
        obj.insert("meta_tags".into(), Value::Array(meta_tags));
        obj.insert("extra".into(), liquid::model::to_value(&self.extra)?);

        Ok(obj)
    }
}

/// Rewrite a URI that does not end in the page extension into a
/// directory-style one, `hello` becoming `hello/index.html`
pub fn normalize_uri(uri: &str) -> String {
    let suffix = format!(".{}", PAGE_EXT);
    if uri.ends_with(&suffix) {
        uri.to_string()
    } else {
        format!("{}/index{}", uri.trim_end_matches('/'), suffix)
    }
}
