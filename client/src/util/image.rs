//! Reading a picked image file into an inline `data:` URL.
//!
//! The result is stored directly in `imageUrl` / `backgroundImage`, so the
//! image travels with the document to the content service and the mirror.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Value for the file input's `accept` attribute.
pub const ACCEPT: &str = "image/*";

/// Whether a picked file's MIME type is an image we can inline.
pub fn is_image_type(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Whether a stored reference is an inline image rather than a URL.
pub fn is_inline(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// First file selected in the `<input type="file">` that fired `ev`.
#[cfg(feature = "hydrate")]
pub fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast as _;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read `file` with a `FileReader` and resolve to its data URL.
///
/// # Errors
///
/// Returns a message if the file is not an image or the browser fails to
/// read it.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: web_sys::File) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    if !is_image_type(&file.type_()) {
        return Err(format!("{} is not an image", file.name()));
    }

    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|v| v.as_string())
                .ok_or_else(|| "file read produced no data".to_owned());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };
    let onerror = {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("file read failed".to_owned()));
            }
        })
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(&file).map_err(|e| format!("{e:?}"))?;

    let result = rx.await.map_err(|_| "file read cancelled".to_owned());
    // Handlers must outlive the read.
    drop(onload);
    drop(onerror);
    result?
}
