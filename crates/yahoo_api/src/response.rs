use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartEnvelopeJSON {
    pub chart: ChartJSON,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartJSON {
    pub result: Option<Vec<ChartResultJSON>>,
    pub error: Option<ChartErrorJSON>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartErrorJSON {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartResultJSON {
    #[serde(default)]
    pub meta: MetaJSON,
    pub timestamp: Option<Vec<i64>>,
    #[serde(default)]
    pub indicators: IndicatorsJSON,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetaJSON {
    pub symbol: Option<String>,
    pub gmtoffset: Option<i32>,
    pub exchange_timezone_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndicatorsJSON {
    #[serde(default)]
    pub quote: Vec<QuoteJSON>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseJSON>,
}

// Yahoo pads non-trading slots with nulls, hence Option everywhere.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteJSON {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl QuoteJSON {
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
            && self.high.is_empty()
            && self.low.is_empty()
            && self.close.is_empty()
            && self.volume.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdjCloseJSON {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
