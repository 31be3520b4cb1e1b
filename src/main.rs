//! Bot Detector Core - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod logic;
pub mod constants;

use api::commands;
use api::export;

fn main() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!(
        "Starting {} v{} (API: {})",
        constants::APP_NAME,
        constants::APP_VERSION,
        constants::get_api_url()
    );

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            // Prediction Commands
            commands::check_account,
            commands::analyze_batch,
            commands::analyze_csv,
            commands::preview_csv,

            // View-State Commands
            commands::get_single_view,
            commands::get_batch_view,
            commands::get_mode,
            commands::set_mode,

            // Export Commands
            export::export_report,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
