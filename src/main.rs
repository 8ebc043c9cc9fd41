use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use fleet_console::config::environment::EnvironmentConfig;
use fleet_console::controllers::VehicleListController;
use fleet_console::directory::InMemoryVehicleDirectory;
use fleet_console::dto::query_dto::{SortDirection, SortKey};
use fleet_console::dto::vehicle_dto::VehicleForm;
use fleet_console::presentation::ConsoleSink;
use fleet_console::utils::format::{format_currency, format_date};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚗 Fleet Console - panel de administración de flota");
    info!("==================================================");

    // El directorio en memoria reemplaza a la tabla hosteada en la demo
    let directory = Arc::new(InMemoryVehicleDirectory::new());
    if config.seed_demo_fleet {
        let seeded = directory.seed_demo_fleet().await?;
        info!("✅ {} vehículos de demostración sembrados", seeded);
    }

    let sink = Arc::new(ConsoleSink);
    let mut console = VehicleListController::new(directory, sink);

    // Carga inicial
    console.load().await?;
    let stats = console.compute_stats();
    info!("📊 Stats de flota: {}", serde_json::to_string(&stats)?);

    // Búsqueda y ordenado como los dispara el panel
    console.set_search_term("sedan");
    info!(
        "🔍 Búsqueda 'sedan': {} resultado(s)",
        console.derived_view().len()
    );

    console.set_search_term("");
    console.set_sort(SortKey::PricePerKm, SortDirection::Ascending);
    info!("🚙 Flota por precio por km:");
    for vehicle in console.derived_view() {
        info!(
            "   {} - {} / km - {} - alta {}",
            vehicle.label(),
            format_currency(vehicle.price_per_km),
            if vehicle.is_available {
                "Available"
            } else {
                "Out of Service"
            },
            format_date(vehicle.created_at)
        );
    }

    // Alta de un vehículo nuevo vía formulario
    let form = VehicleForm {
        make: "Tesla".to_string(),
        model: "Model S".to_string(),
        year: "2024".to_string(),
        color: "Black".to_string(),
        license_plate: "glr100".to_string(),
        vehicle_type: "Sedan".to_string(),
        base_price: "75.00".to_string(),
        price_per_km: "3.10".to_string(),
        capacity: "5".to_string(),
        is_available: "true".to_string(),
        image_url: String::new(),
    };
    console.create_or_update(&form, None).await?;

    let created_id = console
        .vehicles()
        .iter()
        .find(|v| v.license_plate == "GLR100")
        .map(|v| v.id.clone())
        .expect("el vehículo recién creado debe estar en la colección");
    info!("🆕 Vehículo creado con id {}", created_id);

    // Flujo de borrado con confirmación
    console.request_deletion(&created_id)?;
    console.confirm_deletion().await?;

    let stats = console.compute_stats();
    info!("📊 Stats finales: {}", serde_json::to_string(&stats)?);
    info!("👋 Demo finalizada");

    Ok(())
}
