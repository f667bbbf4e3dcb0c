/// All localized user-facing strings for a locale
///
/// Strings are stored raw. Placeholders are written as `{name}` and filled by
/// the caller.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Header ====================
    pub brand: &'static str,
    pub tagline: &'static str,
    pub nav_home: &'static str,
    pub nav_destinations: &'static str,
    pub nav_experiences: &'static str,
    pub nav_offers: &'static str,
    pub nav_contact: &'static str,
    pub book_now: &'static str,
    /// Caption above the language switcher
    pub language: &'static str,

    // ==================== Home ====================
    pub home_meta_title: &'static str,
    pub home_meta_description: &'static str,
    pub home_hero_title: &'static str,
    pub home_hero_subtitle: &'static str,

    // ==================== Contact Page ====================
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub contact_badge: &'static str,
    pub form_title: &'static str,
    pub field_name: &'static str,
    pub field_email: &'static str,
    pub field_phone: &'static str,
    /// Label of the `company` field, shown to visitors as the group size
    pub field_company: &'static str,
    pub field_company_placeholder: &'static str,
    pub field_subject: &'static str,
    pub field_message: &'static str,
    pub submit_button: &'static str,
    pub loading_button: &'static str,
    /// Banner shown after a successful submission
    pub success_message: &'static str,
    /// Banner shown after a failed submission
    pub error_message: &'static str,
    /// Message length counter
    /// Placeholders: {count}, {max}
    pub message_counter: &'static str,
    pub contact_info_title: &'static str,
    pub contact_phone_title: &'static str,
    pub contact_email_title: &'static str,
    pub contact_location_title: &'static str,
    pub contact_location_content: &'static str,
    pub contact_schedule_title: &'static str,
    pub contact_schedule_content: &'static str,
    pub social_media_title: &'static str,

    // ==================== Subject Options ====================
    pub subject_general: &'static str,
    pub subject_booking: &'static str,
    pub subject_custom: &'static str,
    pub subject_support: &'static str,
    pub subject_group: &'static str,
    pub subject_other: &'static str,

    // ==================== Validation ====================
    pub validation_name_min: &'static str,
    pub validation_name_max: &'static str,
    pub validation_name_invalid: &'static str,
    pub validation_email_invalid: &'static str,
    pub validation_email_min: &'static str,
    pub validation_email_max: &'static str,
    pub validation_phone_invalid: &'static str,
    pub validation_company_max: &'static str,
    pub validation_subject_required: &'static str,
    pub validation_subject_max: &'static str,
    pub validation_message_min: &'static str,
    pub validation_message_max: &'static str,
    pub validation_message_invalid: &'static str,

    // ==================== Not Found ====================
    pub not_found_title: &'static str,
    pub not_found_description: &'static str,
    pub not_found_go_back: &'static str,
}

impl LanguageStrings {
    /// Look up a string by its dotted key path (e.g. `validation.name.min`).
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let value = match key {
            "header.brand" => self.brand,
            "header.tagline" => self.tagline,
            "header.nav.home" => self.nav_home,
            "header.nav.destinations" => self.nav_destinations,
            "header.nav.experiences" => self.nav_experiences,
            "header.nav.offers" => self.nav_offers,
            "header.nav.contact" => self.nav_contact,
            "header.bookNow" => self.book_now,
            "header.language" => self.language,

            "home.metaTitle" => self.home_meta_title,
            "home.metaDescription" => self.home_meta_description,
            "home.hero.title" => self.home_hero_title,
            "home.hero.subtitle" => self.home_hero_subtitle,

            "contact.title" => self.contact_title,
            "contact.subtitle" => self.contact_subtitle,
            "contact.badge" => self.contact_badge,
            "contact.formTitle" => self.form_title,
            "contact.formFields.name" => self.field_name,
            "contact.formFields.email" => self.field_email,
            "contact.formFields.phone" => self.field_phone,
            "contact.formFields.company" => self.field_company,
            "contact.formFields.subject" => self.field_subject,
            "contact.formFields.message" => self.field_message,
            "contact.submitButton" => self.submit_button,
            "contact.loadingButton" => self.loading_button,
            "contact.successMessage" => self.success_message,
            "contact.errorMessage" => self.error_message,

            "subjects.general" => self.subject_general,
            "subjects.booking" => self.subject_booking,
            "subjects.custom" => self.subject_custom,
            "subjects.support" => self.subject_support,
            "subjects.group" => self.subject_group,
            "subjects.other" => self.subject_other,

            "validation.name.min" => self.validation_name_min,
            "validation.name.max" => self.validation_name_max,
            "validation.name.invalid" => self.validation_name_invalid,
            "validation.email.invalid" => self.validation_email_invalid,
            "validation.email.min" => self.validation_email_min,
            "validation.email.max" => self.validation_email_max,
            "validation.phone.invalid" => self.validation_phone_invalid,
            "validation.company.max" => self.validation_company_max,
            "validation.subject.required" => self.validation_subject_required,
            "validation.subject.max" => self.validation_subject_max,
            "validation.message.min" => self.validation_message_min,
            "validation.message.max" => self.validation_message_max,
            "validation.message.invalid" => self.validation_message_invalid,

            "notFound.title" => self.not_found_title,
            "notFound.description" => self.not_found_description,
            "notFound.goBack" => self.not_found_go_back,
            _ => return None,
        };
        Some(value)
    }

    /// Like `lookup`, but an unknown key renders as the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(key)
    }
}

// ==================== English Strings ====================

/// English strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    brand: "Mexico Travel",
    tagline: "Tours & experiences",
    nav_home: "Home",
    nav_destinations: "Destinations",
    nav_experiences: "Experiences",
    nav_offers: "Offers",
    nav_contact: "Contact",
    book_now: "Book now",
    language: "Language",

    home_meta_title: "Mexico Travel | Tours and experiences in Mexico",
    home_meta_description: "Discover beaches, culture and cuisine with guided tours across Mexico.",
    home_hero_title: "Discover the magic of Mexico",
    home_hero_subtitle: "Unforgettable trips designed by local experts.",

    contact_title: "Contact Us",
    contact_subtitle: "Tell us about your next trip and we'll help you plan it.",
    contact_badge: "We reply within 24 hours",
    form_title: "Send us a message",
    field_name: "Full Name",
    field_email: "Email",
    field_phone: "Phone",
    field_company: "Group Size",
    field_company_placeholder: "Ex: 2 people, family of 4, etc.",
    field_subject: "How can we help you?",
    field_message: "Message",
    submit_button: "Send Message",
    loading_button: "Sending...",
    success_message: "Message sent! We'll get back to you soon.",
    error_message: "Something went wrong. Please try again.",
    message_counter: "{count}/{max} characters",
    contact_info_title: "Contact information",
    contact_phone_title: "Phone",
    contact_email_title: "Email",
    contact_location_title: "Location",
    contact_location_content: "Cancún, Quintana Roo, Mexico",
    contact_schedule_title: "Office hours",
    contact_schedule_content: "Mon - Sat: 9:00 - 19:00",
    social_media_title: "Follow us",

    subject_general: "General Inquiry",
    subject_booking: "Tour Booking",
    subject_custom: "Custom Route",
    subject_support: "Customer Support",
    subject_group: "Group Travel",
    subject_other: "Other",

    validation_name_min: "Name must be at least 2 characters",
    validation_name_max: "Name cannot exceed 50 characters",
    validation_name_invalid: "Name can only contain letters and spaces",
    validation_email_invalid: "Please enter a valid email",
    validation_email_min: "Email must be at least 5 characters",
    validation_email_max: "Email cannot exceed 100 characters",
    validation_phone_invalid: "Please enter a valid phone number",
    validation_company_max: "Group size cannot exceed 50 characters",
    validation_subject_required: "Please select a subject",
    validation_subject_max: "Subject cannot exceed 100 characters",
    validation_message_min: "Message must be at least 10 characters",
    validation_message_max: "Message cannot exceed 1000 characters",
    validation_message_invalid: "Message must contain valid text",

    not_found_title: "Page not found",
    not_found_description: "The page you are looking for does not exist.",
    not_found_go_back: "Back to home",
};

// ==================== Spanish Strings ====================

pub const SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    brand: "Mexico Travel",
    tagline: "Tours y experiencias",
    nav_home: "Inicio",
    nav_destinations: "Destinos",
    nav_experiences: "Experiencias",
    nav_offers: "Ofertas",
    nav_contact: "Contacto",
    book_now: "Reservar",
    language: "Idioma",

    home_meta_title: "Mexico Travel | Tours y experiencias en México",
    home_meta_description: "Descubre playas, cultura y gastronomía con tours guiados por todo México.",
    home_hero_title: "Descubre la magia de México",
    home_hero_subtitle: "Viajes inolvidables diseñados por expertos locales.",

    contact_title: "Contáctanos",
    contact_subtitle: "Cuéntanos sobre tu próximo viaje y te ayudamos a planearlo.",
    contact_badge: "Respondemos en menos de 24 horas",
    form_title: "Envíanos un mensaje",
    field_name: "Nombre Completo",
    field_email: "Correo Electrónico",
    field_phone: "Teléfono",
    field_company: "Tamaño del Grupo",
    field_company_placeholder: "Ej: 2 personas, familia de 4, etc.",
    field_subject: "¿En qué podemos ayudarte?",
    field_message: "Mensaje",
    submit_button: "Enviar Mensaje",
    loading_button: "Enviando...",
    success_message: "¡Mensaje enviado! Te responderemos pronto.",
    error_message: "Ocurrió un error. Por favor intenta de nuevo.",
    message_counter: "{count}/{max} caracteres",
    contact_info_title: "Información de contacto",
    contact_phone_title: "Teléfono",
    contact_email_title: "Correo",
    contact_location_title: "Ubicación",
    contact_location_content: "Cancún, Quintana Roo, México",
    contact_schedule_title: "Horario",
    contact_schedule_content: "Lun - Sáb: 9:00 - 19:00",
    social_media_title: "Síguenos",

    subject_general: "Consulta General",
    subject_booking: "Reserva de Tours",
    subject_custom: "Ruta Personalizada",
    subject_support: "Soporte al Cliente",
    subject_group: "Viaje en Grupo",
    subject_other: "Otro",

    validation_name_min: "El nombre debe tener al menos 2 caracteres",
    validation_name_max: "El nombre no puede exceder 50 caracteres",
    validation_name_invalid: "El nombre solo puede contener letras y espacios",
    validation_email_invalid: "Por favor ingresa un email válido",
    validation_email_min: "El email debe tener al menos 5 caracteres",
    validation_email_max: "El email no puede exceder 100 caracteres",
    validation_phone_invalid: "Por favor ingresa un número de teléfono válido",
    validation_company_max: "El tamaño del grupo no puede exceder 50 caracteres",
    validation_subject_required: "Por favor selecciona un asunto",
    validation_subject_max: "El asunto no puede exceder 100 caracteres",
    validation_message_min: "El mensaje debe tener al menos 10 caracteres",
    validation_message_max: "El mensaje no puede exceder 1000 caracteres",
    validation_message_invalid: "El mensaje debe contener texto válido",

    not_found_title: "Página no encontrada",
    not_found_description: "La página que buscas no existe.",
    not_found_go_back: "Volver al inicio",
};

// ==================== French Strings ====================

pub const FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    brand: "Mexico Travel",
    tagline: "Circuits et expériences",
    nav_home: "Accueil",
    nav_destinations: "Destinations",
    nav_experiences: "Expériences",
    nav_offers: "Offres",
    nav_contact: "Contact",
    book_now: "Réserver",
    language: "Langue",

    home_meta_title: "Mexico Travel | Circuits et expériences au Mexique",
    home_meta_description: "Découvrez plages, culture et gastronomie avec des circuits guidés au Mexique.",
    home_hero_title: "Découvrez la magie du Mexique",
    home_hero_subtitle: "Des voyages inoubliables conçus par des experts locaux.",

    contact_title: "Contactez-nous",
    contact_subtitle: "Parlez-nous de votre prochain voyage, nous vous aiderons à l'organiser.",
    contact_badge: "Réponse sous 24 heures",
    form_title: "Envoyez-nous un message",
    field_name: "Nom complet",
    field_email: "E-mail",
    field_phone: "Téléphone",
    field_company: "Taille du groupe",
    field_company_placeholder: "Ex : 2 personnes, famille de 4, etc.",
    field_subject: "Comment pouvons-nous vous aider ?",
    field_message: "Message",
    submit_button: "Envoyer le message",
    loading_button: "Envoi en cours...",
    success_message: "Message envoyé ! Nous vous répondrons bientôt.",
    error_message: "Une erreur est survenue. Veuillez réessayer.",
    message_counter: "{count}/{max} caractères",
    contact_info_title: "Coordonnées",
    contact_phone_title: "Téléphone",
    contact_email_title: "E-mail",
    contact_location_title: "Adresse",
    contact_location_content: "Cancún, Quintana Roo, Mexique",
    contact_schedule_title: "Horaires",
    contact_schedule_content: "Lun - Sam : 9h00 - 19h00",
    social_media_title: "Suivez-nous",

    subject_general: "Demande générale",
    subject_booking: "Réservation de circuit",
    subject_custom: "Itinéraire personnalisé",
    subject_support: "Service client",
    subject_group: "Voyage de groupe",
    subject_other: "Autre",

    validation_name_min: "Le nom doit contenir au moins 2 caractères",
    validation_name_max: "Le nom ne peut pas dépasser 50 caractères",
    validation_name_invalid: "Le nom ne peut contenir que des lettres et des espaces",
    validation_email_invalid: "Veuillez saisir un e-mail valide",
    validation_email_min: "L'e-mail doit contenir au moins 5 caractères",
    validation_email_max: "L'e-mail ne peut pas dépasser 100 caractères",
    validation_phone_invalid: "Veuillez saisir un numéro de téléphone valide",
    validation_company_max: "La taille du groupe ne peut pas dépasser 50 caractères",
    validation_subject_required: "Veuillez choisir un sujet",
    validation_subject_max: "Le sujet ne peut pas dépasser 100 caractères",
    validation_message_min: "Le message doit contenir au moins 10 caractères",
    validation_message_max: "Le message ne peut pas dépasser 1000 caractères",
    validation_message_invalid: "Le message doit contenir du texte valide",

    not_found_title: "Page introuvable",
    not_found_description: "La page que vous recherchez n'existe pas.",
    not_found_go_back: "Retour à l'accueil",
};
