use rimgen::{
    encoding, logger, ClientConfig, ImageToImageRequest, ImagingClient, TextToImageRequest,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if dotenv_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = ClientConfig::from_env();
    logger::log_config_info(&config);

    let client = ImagingClient::new(config)?;

    let removal_up = client.background().check_health().await;
    let generation_up = client.generation().check_image_generation_api_health().await;
    log::info!(
        "🩺 Background removal: {} | Image generation: {}",
        if removal_up { "✅" } else { "❌" },
        if generation_up { "✅" } else { "❌" }
    );

    let models = client.generation().get_available_models().await;
    if models.is_empty() {
        log::warn!("No models advertised by the generation service");
    } else {
        log::info!("🤖 Available models: {}", models.join(", "));
    }

    if !generation_up {
        log::error!("❌ Generation service is not reachable, stopping here");
        return Ok(());
    }

    let prompt = env::args()
        .nth(1)
        .unwrap_or_else(|| "a watercolor lighthouse on a cliff at dusk".to_string());

    log::info!("🎨 Text-to-image: {}", prompt);
    let generated = client
        .generation()
        .generate_text_to_image(TextToImageRequest::new(prompt.as_str()))
        .await?;
    log::info!("📐 Parameters: {:?}", generated.generation_params);

    let filename = format!("generated_{}.png", generated.timestamp);
    fs::write(&filename, encoding::decode_image_payload(&generated.image)?)?;
    log::info!("💾 Image saved to: {}", filename);

    let source = if generated.image.starts_with("data:") {
        generated.image.clone()
    } else {
        encoding::build_png_data_reference(&generated.image)
    };

    let request = ImageToImageRequest::new(format!("{}, in winter", prompt), source.as_str())
        .with_steps(4)
        .with_strength(0.5);
    match client.generation().generate_image_to_image(request).await {
        Ok(variation) => {
            let filename = format!("variation_{}.png", variation.timestamp);
            fs::write(&filename, encoding::decode_image_payload(&variation.image)?)?;
            log::info!("💾 Variation saved to: {}", filename);
        }
        Err(e) => log::error!("❌ Image-to-image failed: {}", e),
    }

    if removal_up {
        match client.background().remove_background(&source, None).await {
            Ok(cutout) => {
                let filename = format!("cutout_{}", cutout.filename);
                fs::write(&filename, encoding::decode_image_payload(&cutout.image)?)?;
                log::info!("💾 Cut-out saved to: {}", filename);
            }
            Err(e) => log::error!("❌ Background removal failed: {}", e),
        }
    }

    log::info!("🎉 Done");
    Ok(())
}
