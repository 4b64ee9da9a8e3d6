//! State of the document editor form.
//!
//! One form serves both creating and updating: when `editing` holds a document the
//! submit becomes an update of that document, otherwise a create.

use api::models::TITLE_MAX_CHARS;
use api::{Document, DocumentCreate, DocumentUpdate};

/// Message shown when a required field is blank.
pub const REQUIRED_MESSAGE: &str = "Title and content are required";

/// Transient editor fields plus the document being edited, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentForm {
    pub title: String,
    pub content: String,
    pub editing: Option<Document>,
}

/// What submitting the form should do.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(DocumentCreate),
    Update(i64, DocumentUpdate),
}

impl Submission {
    /// Id of the document being updated; `None` for a create.
    pub fn document_id(&self) -> Option<i64> {
        match self {
            Submission::Create(_) => None,
            Submission::Update(id, _) => Some(*id),
        }
    }
}

impl DocumentForm {
    /// Load `doc` into the form for editing.
    pub fn begin_edit(&mut self, doc: Document) {
        self.title = doc.title.clone();
        self.content = doc.content.clone();
        self.editing = Some(doc);
    }

    /// Leave edit mode and clear the fields.
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clear the form after a successful save of `submitted`, unless the user
    /// picked another document to edit while the request was in flight.
    pub fn finish(&mut self, submitted: Option<i64>) {
        if self.editing_id() == submitted {
            self.reset();
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|doc| doc.id)
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit document"
        } else {
            "New document"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Create"
        }
    }

    /// Validate the fields and build the request to send.
    ///
    /// Blank checks ignore surrounding whitespace, but the fields are sent as typed.
    pub fn submission(&self) -> Result<Submission, String> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(REQUIRED_MESSAGE.to_string());
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(format!("Title must be at most {TITLE_MAX_CHARS} characters"));
        }
        Ok(match &self.editing {
            Some(doc) => Submission::Update(
                doc.id,
                DocumentUpdate::replace(self.title.clone(), self.content.clone()),
            ),
            None => Submission::Create(DocumentCreate::new(self.title.clone(), self.content.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(id: i64, title: &str, content: &str) -> Document {
        let now = Utc::now();
        Document {
            id,
            title: title.to_string(),
            content: content.to_string(),
            owner_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_form_creates() {
        let form = DocumentForm {
            title: "Title".to_string(),
            content: "Body".to_string(),
            editing: None,
        };
        assert_eq!(form.heading(), "New document");
        assert_eq!(form.submit_label(), "Create");
        assert_eq!(
            form.submission(),
            Ok(Submission::Create(DocumentCreate::new("Title", "Body")))
        );
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let mut form = DocumentForm::default();
        assert_eq!(form.submission(), Err(REQUIRED_MESSAGE.to_string()));

        form.title = "Title".to_string();
        form.content = "   \n".to_string();
        assert_eq!(form.submission(), Err(REQUIRED_MESSAGE.to_string()));

        form.title = "  ".to_string();
        form.content = "Body".to_string();
        assert_eq!(form.submission(), Err(REQUIRED_MESSAGE.to_string()));
    }

    #[test]
    fn test_fields_are_sent_untrimmed() {
        let form = DocumentForm {
            title: "  Title ".to_string(),
            content: "Body\n".to_string(),
            editing: None,
        };
        assert_eq!(
            form.submission(),
            Ok(Submission::Create(DocumentCreate::new("  Title ", "Body\n")))
        );
    }

    #[test]
    fn test_long_title_is_rejected() {
        let form = DocumentForm {
            title: "t".repeat(TITLE_MAX_CHARS + 1),
            content: "Body".to_string(),
            editing: None,
        };
        assert_eq!(
            form.submission(),
            Err("Title must be at most 200 characters".to_string())
        );
    }

    #[test]
    fn test_edit_flow() {
        let mut form = DocumentForm::default();
        form.begin_edit(doc(4, "Old title", "Old body"));

        assert!(form.is_editing());
        assert_eq!(form.editing_id(), Some(4));
        assert_eq!(form.title, "Old title");
        assert_eq!(form.content, "Old body");
        assert_eq!(form.heading(), "Edit document");
        assert_eq!(form.submit_label(), "Save");

        form.content = "New body".to_string();
        assert_eq!(
            form.submission(),
            Ok(Submission::Update(4, DocumentUpdate::replace("Old title", "New body")))
        );
    }

    #[test]
    fn test_switching_edit_target_replaces_fields() {
        let mut form = DocumentForm::default();
        form.begin_edit(doc(1, "One", "first"));
        form.title = "One (unsaved change)".to_string();
        form.begin_edit(doc(2, "Two", "second"));

        assert_eq!(form.editing_id(), Some(2));
        assert_eq!(form.title, "Two");
        assert_eq!(form.content, "second");
    }

    #[test]
    fn test_finish_resets_after_save() {
        let mut form = DocumentForm::default();
        form.begin_edit(doc(3, "Title", "Body"));
        let submitted = form.submission().unwrap().document_id();
        assert_eq!(submitted, Some(3));

        form.finish(submitted);
        assert_eq!(form, DocumentForm::default());
    }

    #[test]
    fn test_finish_keeps_selection_made_during_save() {
        let mut form = DocumentForm {
            title: "Draft".to_string(),
            content: "Body".to_string(),
            editing: None,
        };
        let submitted = form.submission().unwrap().document_id();
        assert_eq!(submitted, None);

        // Edit clicked on another document before the create returned
        form.begin_edit(doc(8, "Other", "other body"));
        form.finish(submitted);
        assert_eq!(form.editing_id(), Some(8));
        assert_eq!(form.title, "Other");

        // Same when switching away from the document being saved
        form.finish(Some(3));
        assert_eq!(form.editing_id(), Some(8));
    }

    #[test]
    fn test_cancel_clears_everything() {
        let mut form = DocumentForm::default();
        form.begin_edit(doc(9, "Title", "Body"));
        form.cancel();
        assert_eq!(form, DocumentForm::default());
        assert_eq!(form.heading(), "New document");
    }
}
