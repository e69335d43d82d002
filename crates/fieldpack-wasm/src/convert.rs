use std::collections::BTreeMap;

use fieldpack::{decl::Repr, value::Value};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Converts any debuggable error into a JS string value.
pub fn error_to_js<E: std::fmt::Debug>(err: E) -> JsValue {
    JsValue::from_str(&format!("{:?}", err))
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsValueOut {
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
}

fn value_out(value: Value) -> JsValueOut {
    match value {
        Value::Unsigned(v) => JsValueOut::Unsigned(v),
        Value::Signed(v) => JsValueOut::Signed(v),
        Value::Bool(v) => JsValueOut::Bool(v),
    }
}

pub fn value_to_js(value: Value) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&value_out(value)).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn map_to_js(map: BTreeMap<String, Value>) -> Result<JsValue, JsValue> {
    let out: BTreeMap<String, JsValueOut> =
        map.into_iter().map(|(k, v)| (k, value_out(v))).collect();

    serde_wasm_bindgen::to_value(&out).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Converts a JS number or boolean into the representation `repr` expects.
pub fn js_to_value(repr: Repr, value: &JsValue) -> Result<Value, JsValue> {
    match repr {
        Repr::Bool => value
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| JsValue::from_str("expected a boolean")),
        Repr::Unsigned => {
            let n = as_integer(value)?;
            if n < 0.0 {
                return Err(JsValue::from_str("expected a non-negative integer"));
            }
            Ok(Value::Unsigned(n as u64))
        }
        Repr::Signed => {
            let n = as_integer(value)?;
            Ok(Value::Signed(n as i64))
        }
    }
}

fn as_integer(value: &JsValue) -> Result<f64, JsValue> {
    let n = value
        .as_f64()
        .ok_or_else(|| JsValue::from_str("expected a number"))?;

    if n.fract() != 0.0 {
        return Err(JsValue::from_str("expected an integer"));
    }

    Ok(n)
}
