//! Merging custom sections into a report context.
//!
//! The context is owned by the report renderer. Only two keys under
//! `components` are ever written: `has_customsections` and `customsections`.

use crate::error::{CustomError, Result};
use crate::section::Section;

use serde_json::{Map, Value};
use tracing::debug;

/// Report context as consumed by the template renderer.
pub type Context = Map<String, Value>;

/// An empty context with a `components` object.
pub fn new_context() -> Context {
    let mut context = Context::new();
    context.insert("components".to_string(), Value::Object(Map::new()));
    context
}

/// Add a section to `context["components"]["customsections"]`.
///
/// Sets `has_customsections` to `true` and appends the serialized section,
/// creating the list on first use.
pub fn add_section<'a>(context: &'a mut Context, section: &Section) -> Result<&'a mut Context> {
    let components = context
        .get_mut("components")
        .ok_or_else(|| CustomError::InvalidContext("missing 'components'".to_string()))?
        .as_object_mut()
        .ok_or_else(|| CustomError::InvalidContext("'components' is not an object".to_string()))?;

    let serialized = serde_json::to_value(section)?;
    let sections = components
        .entry("customsections")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| {
            CustomError::InvalidContext("'customsections' is not a list".to_string())
        })?;
    sections.push(serialized);
    let count = sections.len();

    components.insert("has_customsections".to_string(), Value::Bool(true));
    debug!(title = section.title(), sections = count, "Added custom section to context");
    Ok(context)
}

/// Alias of [`add_section`].
pub fn merge_section<'a>(context: &'a mut Context, section: &Section) -> Result<&'a mut Context> {
    add_section(context, section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::CustomHtml;
    use serde_json::json;

    #[test]
    fn test_first_section_creates_list() {
        let mut context = new_context();
        add_section(&mut context, &Section::new("One")).unwrap();

        assert_eq!(context["components"]["has_customsections"], true);
        assert_eq!(context["components"]["customsections"][0]["title"], "One");
    }

    #[test]
    fn test_sections_appended_in_call_order() {
        let mut context = new_context();
        add_section(&mut context, &Section::new("One")).unwrap();
        merge_section(&mut context, &Section::new("Two")).unwrap();

        let titles: Vec<&str> = context["components"]["customsections"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn test_existing_components_preserved() {
        let mut context = json!({
            "components": {"overview": {"rows": 10}, "customsections": [{"title": "Old"}]},
            "layout": "wide"
        })
        .as_object()
        .unwrap()
        .clone();

        let section = Section::with_objects("New", CustomHtml::new("n", "<b>x</b>"));
        add_section(&mut context, &section).unwrap();

        assert_eq!(context["layout"], "wide");
        assert_eq!(context["components"]["overview"]["rows"], 10);
        assert_eq!(context["components"]["customsections"][0]["title"], "Old");
        assert_eq!(
            context["components"]["customsections"][1]["customobjects"][0]["html"],
            "<b>x</b>"
        );
    }

    #[test]
    fn test_missing_components_rejected() {
        let mut context = Context::new();
        let err = add_section(&mut context, &Section::new("One")).unwrap_err();
        assert!(matches!(err, CustomError::InvalidContext(_)));
    }

    #[test]
    fn test_non_list_customsections_rejected() {
        let mut context = json!({"components": {"customsections": "oops"}})
            .as_object()
            .unwrap()
            .clone();
        let err = add_section(&mut context, &Section::new("One")).unwrap_err();
        assert!(matches!(err, CustomError::InvalidContext(_)));
        assert!(context["components"].get("has_customsections").is_none());
    }
}
