use serde::{Deserialize, Serialize};

/// One card on the job-search board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "idList")]
    pub id_list: String,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Card {
    /// Company portion of a `"<Company> - <position>"` card name.
    ///
    /// Splits on the first `-` and trims the left segment. Casing is kept as-is,
    /// so `"Acme"` and `"acme"` are different companies.
    pub fn company(&self) -> &str {
        company_key(&self.name)
    }
}

pub fn company_key(name: &str) -> &str {
    name.split('-').next().unwrap_or_default().trim()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// One sub-response of the batch call. Only successful sub-requests carry the
/// `"200"` key; anything else fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchGroup {
    #[serde(rename = "200")]
    pub cards: Vec<Card>,
}

/// Parsed body of the batch endpoint, one group per requested list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchDocument {
    pub groups: Vec<BatchGroup>,
}

impl BatchDocument {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.groups.iter().flat_map(|group| group.cards.iter())
    }

    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|group| group.cards.len()).sum()
    }
}
