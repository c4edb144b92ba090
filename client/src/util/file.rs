//! Reading files picked through `<input type="file">`.
//!
//! TRADE-OFFS
//! ==========
//! The prediction upload sends the picked `File` handle itself; only the
//! preview and the report image are read into memory. Native builds never
//! see a picked file; their stubs keep event handlers compiling for tests.

use intake::{Attachment, DecodeError};

/// Handle to the first file chosen in a file input.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct PickedFile(pub(crate) web_sys::File);

/// Handle to the first file chosen in a file input.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Debug)]
pub struct PickedFile;

impl PickedFile {
    pub fn name(&self) -> String {
        #[cfg(feature = "csr")]
        {
            self.0.name()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }
}

/// First file of the input that fired `ev`, if any was chosen.
pub fn picked_file(ev: &leptos::ev::Event) -> Option<PickedFile> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let input = ev
            .target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        input.files()?.get(0).map(PickedFile)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Read the picked file into an [`Attachment`].
///
/// # Errors
///
/// Returns [`DecodeError`] when the browser fails to read the file.
pub async fn read_picked(file: &PickedFile) -> Result<Attachment, DecodeError> {
    #[cfg(feature = "csr")]
    {
        let PickedFile(file) = file;
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| DecodeError(js_error(e)))?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        Ok(Attachment::new(file.name(), file.type_(), bytes))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = file;
        Err(DecodeError("file reading requires a browser".to_owned()))
    }
}

/// Render a thrown JS value as a message.
#[cfg(feature = "csr")]
pub(crate) fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
