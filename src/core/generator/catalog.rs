//! Embedded template and translation catalog
//!
//! The catalog is compiled in: component templates plus a translation table
//! per supported language. Both are immutable after startup.

use super::types::ComponentTemplate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language used when a requested language has no translation table
pub const FALLBACK_LANGUAGE: &str = "en";

type TranslationTable = HashMap<&'static str, &'static str>;

/// Translation tables keyed by language code
pub static TRANSLATIONS: Lazy<HashMap<&'static str, TranslationTable>> = Lazy::new(|| {
    let mut db = HashMap::new();

    db.insert(
        "en",
        HashMap::from([
            ("welcome_title", "Welcome to Our App"),
            ("welcome_subtitle", "Your journey starts here"),
            ("login_button", "Log In"),
            ("signup_button", "Sign Up"),
            ("navigation_home", "Home"),
            ("navigation_about", "About"),
            ("navigation_contact", "Contact"),
            ("footer_copyright", "© 2024 Our Company. All rights reserved."),
            ("user_profile_title", "User Profile"),
            ("user_profile_edit", "Edit Profile"),
            ("settings_title", "Settings"),
            ("settings_language", "Language"),
            ("settings_theme", "Theme"),
            ("error_404", "Page not found"),
            ("error_500", "Internal server error"),
        ]),
    );

    db.insert(
        "es",
        HashMap::from([
            ("welcome_title", "Bienvenido a Nuestra App"),
            ("welcome_subtitle", "Tu viaje comienza aquí"),
            ("login_button", "Iniciar Sesión"),
            ("signup_button", "Registrarse"),
            ("navigation_home", "Inicio"),
            ("navigation_about", "Acerca de"),
            ("navigation_contact", "Contacto"),
            (
                "footer_copyright",
                "© 2024 Nuestra Empresa. Todos los derechos reservados.",
            ),
            ("user_profile_title", "Perfil de Usuario"),
            ("user_profile_edit", "Editar Perfil"),
            ("settings_title", "Configuración"),
            ("settings_language", "Idioma"),
            ("settings_theme", "Tema"),
            ("error_404", "Página no encontrada"),
            ("error_500", "Error interno del servidor"),
        ]),
    );

    db.insert(
        "fr",
        HashMap::from([
            ("welcome_title", "Bienvenue dans Notre App"),
            ("welcome_subtitle", "Votre voyage commence ici"),
            ("login_button", "Se Connecter"),
            ("signup_button", "S'inscrire"),
            ("navigation_home", "Accueil"),
            ("navigation_about", "À Propos"),
            ("navigation_contact", "Contact"),
            (
                "footer_copyright",
                "© 2024 Notre Entreprise. Tous droits réservés.",
            ),
            ("user_profile_title", "Profil Utilisateur"),
            ("user_profile_edit", "Modifier le Profil"),
            ("settings_title", "Paramètres"),
            ("settings_language", "Langue"),
            ("settings_theme", "Thème"),
            ("error_404", "Page non trouvée"),
            ("error_500", "Erreur interne du serveur"),
        ]),
    );

    db.insert(
        "de",
        HashMap::from([
            ("welcome_title", "Willkommen in Unserer App"),
            ("welcome_subtitle", "Ihre Reise beginnt hier"),
            ("login_button", "Anmelden"),
            ("signup_button", "Registrieren"),
            ("navigation_home", "Startseite"),
            ("navigation_about", "Über Uns"),
            ("navigation_contact", "Kontakt"),
            (
                "footer_copyright",
                "© 2024 Unser Unternehmen. Alle Rechte vorbehalten.",
            ),
            ("user_profile_title", "Benutzerprofil"),
            ("user_profile_edit", "Profil Bearbeiten"),
            ("settings_title", "Einstellungen"),
            ("settings_language", "Sprache"),
            ("settings_theme", "Design"),
            ("error_404", "Seite nicht gefunden"),
            ("error_500", "Interner Serverfehler"),
        ]),
    );

    db
});

/// Component templates keyed by component type
pub static TEMPLATES: Lazy<HashMap<&'static str, ComponentTemplate>> = Lazy::new(|| {
    let mut templates = HashMap::new();

    templates.insert(
        "welcome",
        ComponentTemplate {
            component_name: "WelcomeComponent".to_string(),
            component_type: "functional".to_string(),
            template: r#"
import React from 'react';

const WelcomeComponent = ({ className = "welcome-container" }) => {
  return (
    <div className={className}>
      <div className="welcome-wrapper">
        <header className="welcome-header">
          <h1 className="welcome-title" data-l10n="welcome_title">
            {l10n.welcome_title}
          </h1>
          <p className="welcome-subtitle" data-l10n="welcome_subtitle">
            {l10n.welcome_subtitle}
          </p>
        </header>
        <div className="welcome-actions">
          <button
            className="btn btn-primary"
            onClick={() => {}}
            data-l10n="login_button"
          >
            {l10n.login_button}
          </button>
          <button
            className="btn btn-secondary"
            onClick={() => {}}
            data-l10n="signup_button"
          >
            {l10n.signup_button}
          </button>
        </div>
      </div>
    </div>
  );
};

export default WelcomeComponent;
"#
            .to_string(),
            required_keys: vec![
                "welcome_title".to_string(),
                "welcome_subtitle".to_string(),
                "login_button".to_string(),
                "signup_button".to_string(),
            ],
        },
    );

    templates.insert(
        "navigation",
        ComponentTemplate {
            component_name: "NavigationComponent".to_string(),
            component_type: "functional".to_string(),
            template: r#"
import React from 'react';

const NavigationComponent = ({ className = "navigation-container" }) => {
  return (
    <nav className={className}>
      <ul className="nav-list">
        <li className="nav-item">
          <a href="/" className="nav-link" data-l10n="navigation_home">
            {l10n.navigation_home}
          </a>
        </li>
        <li className="nav-item">
          <a href="/about" className="nav-link" data-l10n="navigation_about">
            {l10n.navigation_about}
          </a>
        </li>
        <li className="nav-item">
          <a href="/contact" className="nav-link" data-l10n="navigation_contact">
            {l10n.navigation_contact}
          </a>
        </li>
      </ul>
    </nav>
  );
};

export default NavigationComponent;
"#
            .to_string(),
            required_keys: vec![
                "navigation_home".to_string(),
                "navigation_about".to_string(),
                "navigation_contact".to_string(),
            ],
        },
    );

    templates.insert(
        "user_profile",
        ComponentTemplate {
            component_name: "UserProfileComponent".to_string(),
            component_type: "functional".to_string(),
            template: r#"
import React from 'react';

const UserProfileComponent = ({ className = "user-profile-container" }) => {
  return (
    <div className={className}>
      <div className="profile-wrapper">
        <h2 className="profile-title" data-l10n="user_profile_title">
          {l10n.user_profile_title}
        </h2>
        <div className="profile-actions">
          <button
            className="btn btn-outline"
            onClick={() => {}}
            data-l10n="user_profile_edit"
          >
            {l10n.user_profile_edit}
          </button>
        </div>
      </div>
    </div>
  );
};

export default UserProfileComponent;
"#
            .to_string(),
            required_keys: vec![
                "user_profile_title".to_string(),
                "user_profile_edit".to_string(),
            ],
        },
    );

    templates.insert(
        "footer",
        ComponentTemplate {
            component_name: "FooterComponent".to_string(),
            component_type: "functional".to_string(),
            template: r#"
import React from 'react';

const FooterComponent = ({ className = "footer-container" }) => {
  return (
    <footer className={className}>
      <div className="footer-content">
        <p className="footer-copyright" data-l10n="footer_copyright">
          {l10n.footer_copyright}
        </p>
      </div>
    </footer>
  );
};

export default FooterComponent;
"#
            .to_string(),
            required_keys: vec!["footer_copyright".to_string()],
        },
    );

    templates
});

/// Supported language codes, sorted for stable error payloads
pub fn language_keys() -> Vec<String> {
    let mut keys: Vec<String> = TRANSLATIONS.keys().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

/// Known component types, sorted for stable error payloads
pub fn component_keys() -> Vec<String> {
    let mut keys: Vec<String> = TEMPLATES.keys().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

/// Whether a language has a translation table
pub fn is_supported_language(lang: &str) -> bool {
    TRANSLATIONS.contains_key(lang)
}
