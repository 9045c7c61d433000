use heimer_core::Environment;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode the equirectangular background for `env`.
pub async fn load(env: Environment) -> anyhow::Result<web::ImageBitmap> {
    let url = env.url();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    let promise = window
        .create_image_bitmap_with_html_image_element(&img)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("createImageBitmap: {:?}", e))?
        .dyn_into::<web::ImageBitmap>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!(
        "[env] loaded {:?} background {}x{}",
        env,
        bitmap.width(),
        bitmap.height()
    );
    Ok(bitmap)
}
