use chrono::Datelike;
use liquid_core::{Runtime, Error, ParseTag, Renderable, TagReflection, TagTokenIter};

/// `{% year %}`: the current calendar year
#[derive(Debug, Clone, Copy, Default)]
pub struct YearTag;

struct YearTagReflection;

impl TagReflection for YearTagReflection {
    fn tag(&self) -> &str {
        "year"
    }

    fn description(&self) -> &str {
        "Outputs the current year"
    }
}

impl ParseTag for YearTag {
    fn reflection(&self) -> &dyn TagReflection {
        &YearTagReflection
    }

    fn parse(&self, mut arguments: TagTokenIter, _options: &liquid_core::parser::Language) -> Result<Box<dyn Renderable>, Error> {
        arguments.expect_nothing()?;
        Ok(Box::new(YearRenderer))
    }
}

#[derive(Debug)]
struct YearRenderer;

impl Renderable for YearRenderer {
    fn render_to(&self, writer: &mut dyn std::io::Write, _runtime: &dyn Runtime) -> Result<(), Error> {
        let year = chrono::Local::now().year();
        writer
            .write_all(year.to_string().as_bytes())
            .map_err(|e| Error::with_msg(format!("Failed to write to output: {}", e)))
    }
}
