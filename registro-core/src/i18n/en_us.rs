//! English texts (en-US)

use super::keys::{DeleteTexts, FormTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    form: FormTexts {
        submit_register: "Register",
        submit_save: "Save changes",
        response_received: "Response received.",
        network_error: "Network or server error. Please try again.",
    },
    list: ListTexts {
        loading: "Loading...",
        empty: "No records yet.",
        count_suffix: "registered",
        load_failed: "Failed to load",
        load_network_error: "Network error while loading registrations.",
        course_label: "Course",
        edit: "Edit",
        delete: "Delete",
    },
    delete: DeleteTexts {
        confirm: "Delete this record? This cannot be undone.",
        failed: "Failed to delete",
        network_error: "Network error while deleting",
    },
};
