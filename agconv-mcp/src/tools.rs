//! Tool handlers
//!
//! A tool either returns a result or, when the conversion itself fails, a
//! result with `isError: true` and an `ErrorReport`. Bad arguments are
//! protocol errors.

use agconv_core::{round_to, ConvertError, ErrorReport};
use agconv_units::{
    conversion_family, crop_rate, standard_label, unit_from_label, value_from_to, Category,
    CategoryKind, Crop, DilutedProductApplication, Unit, UnitDescriptor,
};
use agconv_units::{Area, Length, Mass, Time, Volume};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use crate::config::ServerConfig;
use crate::protocol::McpError;

/// Tool definitions returned by `tools/list`
pub fn definitions() -> JsonValue {
    let unit_pair = json!({
        "value": { "type": "number", "description": "Value to convert" },
        "from_unit": { "type": "string", "description": "Source unit, e.g. ac, kg1ha-1, kg/ha" },
        "to_unit": { "type": "string", "description": "Target unit, e.g. ha, lb1ac-1" },
        "places": { "type": "integer", "description": "Decimal places to round the result to" }
    });
    let mut crop_args = unit_pair.clone();
    crop_args["crop"] = json!({
        "type": "string",
        "description": "Crop name, e.g. wheat, corn, cotton (needed only between mass and volume rates)"
    });

    json!({
        "tools": [
            {
                "name": "convert_value",
                "description": "Convert a value between units of the same kind: length, area, mass, volume, or a mass or volume per area rate.",
                "inputSchema": {
                    "type": "object",
                    "properties": unit_pair,
                    "required": ["value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "convert_crop_yield",
                "description": "Convert a crop yield or application rate. Bridges mass per area and bushels or bales per area using the crop's weight per bushel or bale.",
                "inputSchema": {
                    "type": "object",
                    "properties": crop_args,
                    "required": ["crop", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "standard_label",
                "description": "Canonical label for a unit, e.g. hectares -> ha, kg/ha -> kg1ha-1",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string", "description": "Any accepted unit spelling" }
                    },
                    "required": ["label"]
                }
            },
            {
                "name": "describe_unit",
                "description": "Resolve a unit label and describe it: kind, symbol, full name, display form and scale factor.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "label": { "type": "string", "description": "Any accepted unit spelling" }
                    },
                    "required": ["label"]
                }
            },
            {
                "name": "application_rate",
                "description": "Rate at which a diluted product lands on an area, e.g. 10 g per litre sprayed at 100 l/ha is 1000 g1ha-1.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "product_amount": { "type": "number", "description": "Product in the solvent amount, e.g. 10" },
                        "product_unit": { "type": "string", "description": "Mass or volume unit of the product, e.g. g" },
                        "carrier_solvent_amount": { "type": "number", "description": "Carrier the product is dissolved in (default 1)", "default": 1 },
                        "carrier_solvent_unit": { "type": "string", "description": "Unit of the carrier the product is dissolved in, e.g. l" },
                        "carrier_application_amount": { "type": "number", "description": "Carrier applied per area unit, e.g. 100" },
                        "carrier_application_unit": { "type": "string", "description": "Unit of the applied carrier, e.g. l" },
                        "area_unit": { "type": "string", "description": "Area unit, e.g. ha" },
                        "places": { "type": "integer", "description": "Decimal places to round the result to" }
                    },
                    "required": ["product_amount", "product_unit", "carrier_solvent_unit",
                                 "carrier_application_amount", "carrier_application_unit", "area_unit"]
                }
            },
            {
                "name": "list_units",
                "description": "List registered units, optionally for one category (length, area, mass, volume, time)",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category to list" }
                    }
                }
            },
            {
                "name": "list_crops",
                "description": "List crops usable for yield conversions with their weight per bushel or bale",
                "inputSchema": { "type": "object", "properties": {} }
            }
        ]
    })
}

/// Run a tool by name
pub fn call(config: &ServerConfig, name: &str, args: JsonValue) -> Result<JsonValue, McpError> {
    tracing::debug!(tool = name, "calling tool");
    match name {
        "convert_value" => tool_convert_value(config, args),
        "convert_crop_yield" => tool_convert_crop_yield(config, args),
        "standard_label" => tool_standard_label(args),
        "describe_unit" => tool_describe_unit(args),
        "application_rate" => tool_application_rate(config, args),
        "list_units" => tool_list_units(args),
        "list_crops" => tool_list_crops(),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn parse_args<T: DeserializeOwned>(args: JsonValue) -> Result<T, McpError> {
    serde_json::from_value(args).map_err(|e| McpError::invalid_params(format!("Invalid arguments: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<JsonValue, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::internal(e.to_string()))
}

fn rounded(config: &ServerConfig, places: Option<u32>, value: f64) -> f64 {
    match places.or(config.round_places) {
        Some(places) => round_to(value, places),
        None => value,
    }
}

fn success(text: String, structured: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "structuredContent": structured,
        "isError": false
    })
}

fn failure(err: &ConvertError) -> JsonValue {
    tracing::debug!(code = err.code(), error = %err, "tool failed");
    let report = ErrorReport::from(err);
    json!({
        "content": [{ "type": "text", "text": report.message }],
        "structuredContent": { "error": report },
        "isError": true
    })
}

#[derive(Debug, Deserialize)]
struct ConvertArgs {
    value: f64,
    from_unit: String,
    to_unit: String,
    places: Option<u32>,
}

fn tool_convert_value(config: &ServerConfig, args: JsonValue) -> Result<JsonValue, McpError> {
    let args: ConvertArgs = parse_args(args)?;
    match value_from_to(args.value, &args.from_unit, &args.to_unit) {
        Ok(value) => {
            let value = rounded(config, args.places, value);
            let family = conversion_family(&args.from_unit, &args.to_unit);
            Ok(success(
                format!("{} {} = {} {}", args.value, args.from_unit, value, args.to_unit),
                json!({
                    "value": value,
                    "from_unit": args.from_unit,
                    "to_unit": args.to_unit,
                    "family": family,
                }),
            ))
        }
        Err(err) => Ok(failure(&err)),
    }
}

#[derive(Debug, Deserialize)]
struct CropArgs {
    #[serde(default)]
    crop: String,
    value: f64,
    from_unit: String,
    to_unit: String,
    places: Option<u32>,
}

fn tool_convert_crop_yield(config: &ServerConfig, args: JsonValue) -> Result<JsonValue, McpError> {
    let args: CropArgs = parse_args(args)?;
    match crop_rate(&args.crop, args.value, &args.from_unit, &args.to_unit) {
        Ok(value) => {
            let value = rounded(config, args.places, value);
            Ok(success(
                format!("{} {} of {} = {} {}", args.value, args.from_unit, args.crop, value, args.to_unit),
                json!({
                    "value": value,
                    "crop": args.crop,
                    "from_unit": args.from_unit,
                    "to_unit": args.to_unit,
                }),
            ))
        }
        Err(err) => Ok(failure(&err)),
    }
}

#[derive(Debug, Deserialize)]
struct LabelArgs {
    label: String,
}

fn tool_standard_label(args: JsonValue) -> Result<JsonValue, McpError> {
    let args: LabelArgs = parse_args(args)?;
    match standard_label(&args.label) {
        Ok(standard) => Ok(success(
            standard.clone(),
            json!({ "label": args.label, "standard": standard }),
        )),
        Err(err) => Ok(failure(&err)),
    }
}

fn tool_describe_unit(args: JsonValue) -> Result<JsonValue, McpError> {
    let args: LabelArgs = parse_args(args)?;
    let unit = match unit_from_label(&args.label) {
        Ok(unit) => unit,
        Err(err) => return Ok(failure(&err)),
    };

    let mut description = json!({
        "label": args.label,
        "standard": unit.to_string(),
        "kind": unit.kind_name(),
        "full": unit.full(),
        "fancy": unit.fancy(),
    });
    match unit {
        Unit::Area(u) => description["factor"] = json!(u.factor()),
        Unit::Length(u) => description["factor"] = json!(u.factor()),
        Unit::Mass(u) => description["factor"] = json!(u.factor()),
        Unit::Time(u) => description["factor"] = json!(u.factor()),
        Unit::Volume(u) => description["factor"] = json!(u.factor()),
        Unit::MassAreaRatio(u) => {
            description["numerator"] = to_json(u.numerator)?;
            description["denominator"] = to_json(u.denominator)?;
        }
        Unit::VolumeAreaRatio(u) => {
            description["numerator"] = to_json(u.numerator)?;
            description["denominator"] = to_json(u.denominator)?;
        }
    }
    if let Some(category) = unit.category() {
        description["base_unit"] = json!(category.base_symbol());
    }

    Ok(success(
        format!("{} ({}, {})", unit, unit.full(), unit.kind_name()),
        description,
    ))
}

fn tool_application_rate(config: &ServerConfig, args: JsonValue) -> Result<JsonValue, McpError> {
    let places = args.get("places").and_then(|v| v.as_u64()).and_then(|p| u32::try_from(p).ok());
    let application: DilutedProductApplication = parse_args(args)?;
    match application.application_rate() {
        Ok(rate) => {
            let value = rounded(config, places, rate.value);
            let unit = rate.label();
            Ok(success(
                format!("{} {}", value, unit),
                json!({ "value": value, "unit": unit, "application": application }),
            ))
        }
        Err(err) => Ok(failure(&err)),
    }
}

fn units_of<C: Category>() -> JsonValue {
    let units: Vec<&UnitDescriptor<C>> = C::units().to_vec();
    json!({
        "category": C::KIND,
        "base_unit": C::KIND.base_symbol(),
        "units": units,
    })
}

fn units_for(kind: CategoryKind) -> JsonValue {
    match kind {
        CategoryKind::Length => units_of::<Length>(),
        CategoryKind::Area => units_of::<Area>(),
        CategoryKind::Mass => units_of::<Mass>(),
        CategoryKind::Volume => units_of::<Volume>(),
        CategoryKind::Time => units_of::<Time>(),
    }
}

#[derive(Debug, Deserialize)]
struct ListUnitsArgs {
    category: Option<String>,
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    let args: ListUnitsArgs = parse_args(args)?;
    let kinds = match args.category.as_deref() {
        None => CategoryKind::ALL.to_vec(),
        Some(name) => match CategoryKind::from_name(name) {
            Some(kind) => vec![kind],
            None => {
                return Ok(failure(&ConvertError::InvalidArgument(format!(
                    "unknown category '{}', expected one of length, area, mass, volume, time",
                    name
                ))))
            }
        },
    };

    let categories: Vec<JsonValue> = kinds.into_iter().map(units_for).collect();
    let summary = categories
        .iter()
        .map(|c| {
            let symbols: Vec<&str> = c["units"]
                .as_array()
                .map(|units| units.iter().filter_map(|u| u["symbol"].as_str()).collect())
                .unwrap_or_default();
            format!("{}: {}", c["category"].as_str().unwrap_or_default(), symbols.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(success(summary, json!({ "categories": categories })))
}

fn tool_list_crops() -> Result<JsonValue, McpError> {
    let crops: Vec<&Crop> = Crop::all().collect();
    let summary = crops
        .iter()
        .map(|c| format!("{}: {} g per {}", c.name, c.grams_per_unit, c.yield_unit))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(success(summary, json!({ "crops": crops })))
}
