//! Values and control metadata carried by process variables.

/// A value held by a process variable.
#[derive(Clone, Debug, PartialEq)]
pub enum PvValue {
    Double(f64),
    Long(i64),
    Enum(u16),
    Str(String),
}

impl PvValue {
    /// Numeric view of the value, when one exists.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Long(v) => Some(*v as f64),
            Self::Enum(i) => Some(f64::from(*i)),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// The enum choice index, for enum-typed values.
    pub fn as_enum_index(&self) -> Option<u16> {
        match self {
            Self::Enum(i) => Some(*i),
            _ => None,
        }
    }
}

/// Control metadata fetched alongside a value: what a client would read from
/// the record's control fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PvMetadata {
    pub units: String,
    /// Display precision; `None` when the record does not declare one.
    pub precision: Option<u16>,
    pub lower_ctrl_limit: Option<f64>,
    pub upper_ctrl_limit: Option<f64>,
    /// Choice labels for enum-typed records, in index order.
    pub enum_strs: Vec<String>,
}

/// One change notification delivered to monitors.
#[derive(Clone, Debug, PartialEq)]
pub struct PvUpdate {
    pub value: PvValue,
    pub metadata: PvMetadata,
}

/// Render a value the way operator displays expect: fixed point when a
/// nonzero precision is declared, plain rendering otherwise.
pub fn char_value(value: &PvValue, precision: Option<u16>) -> String {
    match value {
        PvValue::Double(v) => match precision {
            Some(p) if p > 0 => format!("{v:.prec$}", prec = p as usize),
            _ => format!("{v}"),
        },
        PvValue::Long(v) => v.to_string(),
        PvValue::Enum(i) => i.to_string(),
        PvValue::Str(s) => s.clone(),
    }
}
