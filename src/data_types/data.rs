use serde::{Deserialize, Serialize};

/// Serde adapter for colours stored as `0xRRGGBB` and written as `#rrggbb`.
pub mod hex_color {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("#{:06x}", color & 0x00ff_ffff))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_hex_str(&raw).map_err(D::Error::custom)
    }

    pub fn parse_hex_str(hex: &str) -> eyre::Result<u32> {
        let digits = hex.trim().trim_start_matches('#');
        eyre::ensure!(
            digits.len() == 6,
            "expected a `#rrggbb` colour, got `{}`",
            hex
        );
        Ok(u32::from_str_radix(digits, 16)?)
    }
}

/// RGB colour of a series, `0xRRGGBB`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SeriesColor(pub u32);

impl Serialize for SeriesColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        hex_color::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SeriesColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        hex_color::deserialize(deserializer).map(Self)
    }
}

impl SeriesColor {
    pub const WHITE: SeriesColor = SeriesColor(0xffffff);
    pub const BLACK: SeriesColor = SeriesColor(0x000000);

    pub fn parse(hex: &str) -> eyre::Result<Self> {
        hex_color::parse_hex_str(hex).map(Self)
    }
}

/// One category of data, drawn as a coloured segment in every row that carries it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub color: SeriesColor,
}

impl Series {
    pub fn new(id: impl Into<String>, color: SeriesColor) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }
}

/// Ordered, frozen list of the series of one chart. Order is first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesCatalog {
    series: Vec<Series>,
}

impl SeriesCatalog {
    /// Builds a catalog, rejecting empty and duplicate ids.
    pub fn new(series: Vec<Series>) -> eyre::Result<Self> {
        for (idx, s) in series.iter().enumerate() {
            eyre::ensure!(!s.id.is_empty(), "series #{} has an empty id", idx);
            if series[..idx].iter().any(|other| other.id == s.id) {
                eyre::bail!("series `{}` appears twice in the catalog", s.id);
            }
        }
        Ok(Self { series })
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.series.iter().position(|s| s.id == id)
    }

    pub fn get(&self, idx: usize) -> Option<&Series> {
        self.series.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> + '_ {
        self.series.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|s| s.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// A raw segment as handed over by the placeholder parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentInput {
    pub series: String,
    pub value: f64,
    /// Tooltip text, e.g. `"12 items"`.
    #[serde(default)]
    pub label: Option<String>,
}

impl SegmentInput {
    pub fn new(series: impl Into<String>, value: f64) -> Self {
        Self {
            series: series.into(),
            value,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A raw table cell holding one stacked bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowInput {
    /// Table column the cell belongs to. Reference maxima are shared per column.
    #[serde(default)]
    pub column: String,
    pub container_width: f64,
    pub segments: Vec<SegmentInput>,
}

impl RowInput {
    pub fn new(container_width: f64, segments: Vec<SegmentInput>) -> Self {
        Self {
            column: String::new(),
            container_width,
            segments,
        }
    }

    pub fn in_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }
}
