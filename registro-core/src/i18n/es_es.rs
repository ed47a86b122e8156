//! Spanish texts (es-ES)

use super::keys::{DeleteTexts, FormTexts, ListTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    form: FormTexts {
        submit_register: "Registrar",
        submit_save: "Guardar cambios",
        response_received: "Respuesta recibida.",
        network_error: "Error de red o del servidor. Intenta nuevamente.",
    },
    list: ListTexts {
        loading: "Cargando...",
        empty: "No hay registros aún.",
        count_suffix: "registrados",
        load_failed: "Error al cargar",
        load_network_error: "Error de red al cargar interesados.",
        course_label: "Curso",
        edit: "Editar",
        delete: "Eliminar",
    },
    delete: DeleteTexts {
        confirm: "¿Eliminar este registro? Esta acción no se puede deshacer.",
        failed: "Error al eliminar",
        network_error: "Error de red al eliminar",
    },
};
