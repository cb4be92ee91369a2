use liquid_core::{Runtime, Error, ParseTag, Renderable, TagReflection, TagTokenIter};

/// `{% version %}`: the version string of the running build
#[derive(Debug, Clone)]
pub struct VersionTag {
    version: String,
}

impl VersionTag {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }
}

struct VersionTagReflection;

impl TagReflection for VersionTagReflection {
    fn tag(&self) -> &str {
        "version"
    }

    fn description(&self) -> &str {
        "Outputs the generator version"
    }
}

impl ParseTag for VersionTag {
    fn reflection(&self) -> &dyn TagReflection {
        &VersionTagReflection
    }

    fn parse(&self, mut arguments: TagTokenIter, _options: &liquid_core::parser::Language) -> Result<Box<dyn Renderable>, Error> {
        arguments.expect_nothing()?;
        Ok(Box::new(VersionRenderer {
            version: self.version.clone(),
        }))
    }
}

#[derive(Debug)]
struct VersionRenderer {
    version: String,
}

impl Renderable for VersionRenderer {
    fn render_to(&self, writer: &mut dyn std::io::Write, _runtime: &dyn Runtime) -> Result<(), Error> {
        writer
            .write_all(self.version.as_bytes())
            .map_err(|e| Error::with_msg(format!("Failed to write to output: {}", e)))
    }
}
