use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Numeric reading of a stored field: numbers as-is, numeric strings parsed,
/// everything else (null, bools, objects, NaN) absent.
fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_points<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value).map_or(0, |n| n.trunc() as i64))
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// A logged-in member. Anything beyond `name` and `points` is carried through
/// untouched so records written by other page scripts survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    /// Missing, null or non-numeric reads as 0; fractions are truncated.
    #[serde(default, deserialize_with = "lenient_points")]
    pub points: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(name: impl Into<String>, points: i64) -> Self {
        Self {
            name: name.into(),
            points,
            extra: Map::new(),
        }
    }
}

/// One cart line as the shop page stored it. The value is kept verbatim and
/// written back unchanged; only the fields the header needs are read, and
/// those leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItem(Value);

impl From<Value> for CartItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl CartItem {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(lenient_number)
    }

    /// Units this line contributes to the badge. Missing, unreadable or
    /// below one counts as one.
    pub fn units(&self) -> u32 {
        self.number("quantity")
            .filter(|q| *q >= 1.0)
            .map_or(1, |q| q as u32)
    }

    /// Amount this line contributes to the fallback total.
    ///
    /// `totalPrice` wins when set and non-zero, then `price`, then zero.
    /// `quantity` is not applied to `price`.
    pub fn line_total(&self) -> f64 {
        self.number("totalPrice")
            .filter(|p| *p != 0.0)
            .or_else(|| self.number("price").filter(|p| *p != 0.0))
            .unwrap_or(0.0)
    }
}
