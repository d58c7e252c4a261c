use room_core::{decode_placard_image, PlacardImage, SceneGraph};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_ok(url: &str) -> anyhow::Result<web::Response> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::SameOrigin);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let promise: js_sys::Promise = window.fetch_with_request(&request);
    let resp_value = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("GET {} -> HTTP {}", url, resp.status());
    }
    Ok(resp)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = fetch_ok(url).await?;
    let text_promise = resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("GET {}: body is not text", url))
}

pub async fn load_scene(url: &str) -> anyhow::Result<SceneGraph> {
    let text = fetch_text(url).await?;
    let graph = SceneGraph::from_json(&text)?;
    log::info!("[assets] {} -> {} nodes", url, graph.len());
    Ok(graph)
}

/// GET `url` and return the raw body.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = fetch_ok(url).await?;
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_placard_image(index: usize, url: &str) -> anyhow::Result<PlacardImage> {
    let bytes = fetch_bytes(url).await?;
    let image = decode_placard_image(index, &bytes)?;
    log::info!("[assets] {} -> placard {}", url, index);
    Ok(image)
}
