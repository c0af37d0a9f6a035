//! Maintenance Screen Component

use leptos::prelude::*;

/// Full-screen notice shown instead of the app in maintenance mode
#[component]
pub fn MaintenanceScreen() -> impl IntoView {
    view! {
        <div class="maintenance-screen">
            <div class="maintenance-content">
                <div class="maintenance-icon">"🔧"</div>
                <h1 class="maintenance-title">"Estamos en mantenimiento"</h1>
                <p class="maintenance-text">
                    "Estamos trabajando para mejorar el sistema. Volveremos pronto con nuevas funcionalidades y mejor rendimiento."
                </p>
                <div class="maintenance-spinner">
                    <div class="loader-ring-neon"></div>
                </div>
                <p class="maintenance-footer">
                    "Sistema EasyTrack - JASANA" <br />
                    "Gracias por tu paciencia 🙏" <br />
                    "ClerDevs-Code"
                </p>
            </div>
        </div>
    }
}
