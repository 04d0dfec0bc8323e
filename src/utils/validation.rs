use validator::ValidationErrors;

/// Flattens validation errors into one line per field for inline display.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut out: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::course_dto::CourseForm;
    use validator::Validate;

    #[test]
    fn field_messages_are_flattened() {
        let form = CourseForm::default();
        let errors = form.validate().unwrap_err();
        assert_eq!(messages(&errors), vec!["Title is required".to_string()]);
    }
}
