use std::fmt;
use liquid_core::{Runtime, ValueView, Value, Result as LiquidResult, Error as LiquidError};
use liquid_core::parser::{FilterArguments, ParseFilter, ParameterReflection};
use liquid_core::FilterReflection;

/// Injects a page's rendered body into a template without escaping it.
///
/// `{{ page | content }}` reads the `content` field of the page object;
/// a plain string input is passed through unchanged.
#[derive(Debug, Clone)]
pub struct ContentFilter;

impl liquid_core::Filter for ContentFilter {
    fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> LiquidResult<Value> {
        if let Some(page) = input.as_object() {
            let content = page
                .get("content")
                .ok_or_else(|| LiquidError::with_msg("content: page object has no content field"))?;
            return Ok(Value::scalar(content.to_kstr().to_string()));
        }

        if input.as_scalar().is_some() {
            return Ok(Value::scalar(input.to_kstr().to_string()));
        }

        Err(LiquidError::with_msg("content: expected a page or a string"))
    }
}

impl fmt::Display for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content")
    }
}

/// Parse filter factory for content
#[derive(Debug, Clone)]
pub struct ContentFilterParser;

impl FilterReflection for ContentFilterParser {
    fn name(&self) -> &str {
        "content"
    }

    fn description(&self) -> &str {
        "Outputs a page's rendered content as markup"
    }

    fn positional_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }

    fn keyword_parameters(&self) -> &'static [ParameterReflection] {
        &[]
    }
}

impl ParseFilter for ContentFilterParser {
    fn parse(&self, _args: FilterArguments) -> LiquidResult<Box<dyn liquid_core::Filter>> {
        Ok(Box::new(ContentFilter))
    }

    fn reflection(&self) -> &dyn FilterReflection {
        self
    }
}
