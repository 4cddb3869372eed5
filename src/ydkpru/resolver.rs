use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ygopro::data::CardRecord;

/// Catalog lookup the engine is handed.
///
/// May answer with fewer records than asked for; ids it doesn't know are
/// simply missing from the result.
pub trait CardResolver {
    fn resolve_cards_by_ids(&self, ids: &[u32]) -> Vec<CardRecord>;
}

/// In-memory catalog, loaded from a json or yaml card list.
#[derive(Debug, Default, Clone)]
pub struct CardCatalog {
    cards: HashMap<u32, CardRecord>
}

impl CardCatalog {
    pub fn from_records<I: IntoIterator<Item = CardRecord>>(records: I) -> Self {
        Self {
            cards: records.into_iter().map(|card| (card.id, card)).collect()
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|err| anyhow!("Cannot open card catalog {}: {}", path.display(), err))?;
        let records: Vec<CardRecord> = match path.extension().unwrap_or_default().to_str().unwrap_or_default() {
            "yaml" | "yml" => serde_yaml::from_reader(file)?,
            "json" => {
                let mut data = String::new();
                file.read_to_string(&mut data)?;
                serde_json::from_str(&data)?
            }
            extension => return Err(anyhow!("Unsupported card catalog format: {}", extension)),
        };
        let catalog = Self::from_records(records);
        info!("Loaded {} cards from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&CardRecord> {
        self.cards.get(&id)
    }

    pub fn len(&self) -> usize { self.cards.len() }
    pub fn is_empty(&self) -> bool { self.cards.is_empty() }
}

impl CardResolver for CardCatalog {
    fn resolve_cards_by_ids(&self, ids: &[u32]) -> Vec<CardRecord> {
        ids.iter().filter_map(|id| self.cards.get(id).cloned()).collect()
    }
}
