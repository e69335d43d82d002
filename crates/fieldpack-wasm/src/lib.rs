//! WASM bindings for the `fieldpack` bitfield layout engine.
//!
//! This crate exposes a compact API to JavaScript for instantiating bitfield
//! records from a JSON layout definition, populating their fields, and
//! cross-checking the resulting bit pattern — the JS side of a binding
//! round-trip. Internally it uses the `fieldpack` crate to resolve the layout
//! and perform checked field access.
//!
//! At a high level you:
//! - **Describe the record** in JSON using the shape in `fieldpack::serde`
//!   (field name, width in bits, representation, storage unit).
//! - **Instantiate** the record once, then set and read fields from
//!   JavaScript as numbers and booleans.
//! - **Exchange bytes** with the native side and call `matches` with the
//!   expected per-field values.
//!
//! The entry point from JS is the [`WasmRecord`] type:
//!
//! ```text
//! // Pseudo TypeScript example
//! //
//! // const layoutJson = JSON.stringify({
//! //   fields: [
//! //     { name: "three_bits_byte_one", width_bits: 3, storage: "Byte" },
//! //     { width_bits: 0, storage: "Byte" },
//! //     { name: "six_bits_byte_two", width_bits: 6, storage: "Byte" },
//! //     { name: "two_bits_byte_two", width_bits: 2, storage: "Byte" }
//! //   ]
//! // });
//! //
//! // const record = new WasmRecord(layoutJson);
//! // record.set("six_bits_byte_two", 51);
//! // const ok = record.matches([0, 51, 0]);
//! // const bytes = record.bytes();
//! ```
//!
//! Error values are converted to `JsValue` with a `Debug` representation,
//! which makes it easy to inspect failures from JavaScript.

mod convert;

use fieldpack::{layout::Layout, record::Record, serde::RecordDef};
use wasm_bindgen::prelude::*;

/// Bitfield record that can be populated and inspected from JavaScript.
#[wasm_bindgen]
pub struct WasmRecord {
    record: Record,
}

#[wasm_bindgen]
impl WasmRecord {
    /// Creates a zeroed record from a JSON layout definition.
    ///
    /// The `layout_json` string must deserialize into
    /// [`RecordDef`], which lists the bitfield declarations in layout order:
    /// name (omitted for padding and separators), width in bits,
    /// representation, and storage unit. On success the declarations are
    /// packed once and the record can be reused for many round-trips.
    #[wasm_bindgen(constructor)]
    pub fn new(layout_json: &str) -> Result<WasmRecord, JsValue> {
        let def: RecordDef = serde_json::from_str(layout_json).map_err(convert::error_to_js)?;
        let layout = Layout::try_from(def).map_err(convert::error_to_js)?;
        Ok(WasmRecord {
            record: Record::new(layout),
        })
    }

    /// Sets a named field from a JS number or boolean.
    ///
    /// The value must match the field's declared representation and fit its
    /// width; out-of-range values are rejected, never truncated.
    pub fn set(&mut self, name: &str, value: JsValue) -> Result<(), JsValue> {
        let field = self
            .record
            .layout()
            .field(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown field `{}`", name)))?;

        let value = convert::js_to_value(field.repr, &value)?;
        self.record.set(name, value).map_err(convert::error_to_js)
    }

    /// Reads a named field as a JS number or boolean.
    pub fn get(&self, name: &str) -> Result<JsValue, JsValue> {
        let value = self.record.get(name).map_err(convert::error_to_js)?;
        convert::value_to_js(value)
    }

    /// Snapshots every field into a JS object keyed by field name.
    pub fn fields(&self) -> Result<JsValue, JsValue> {
        let values = self.record.values().map_err(convert::error_to_js)?;
        convert::map_to_js(values)
    }

    /// Returns true if the given values (one per named field, declaration
    /// order) all equal the current field values.
    pub fn matches(&self, expected: Box<[JsValue]>) -> Result<bool, JsValue> {
        let fields = self.record.layout().fields();
        if expected.len() != fields.len() {
            return Ok(false);
        }

        let mut values = Vec::with_capacity(expected.len());
        for (field, js) in fields.iter().zip(expected.iter()) {
            values.push(convert::js_to_value(field.repr, js)?);
        }

        Ok(self.record.matches(&values))
    }

    /// Raw little-endian bytes of the record, for passing across the
    /// interface boundary.
    pub fn bytes(&self) -> Vec<u8> {
        self.record.as_bytes().to_vec()
    }

    /// Replaces the record's contents with bytes observed on the native side.
    pub fn load_bytes(&mut self, data: &[u8]) -> Result<(), JsValue> {
        let layout = self.record.layout().clone();
        self.record = Record::from_bytes(layout, data).map_err(convert::error_to_js)?;
        Ok(())
    }
}
