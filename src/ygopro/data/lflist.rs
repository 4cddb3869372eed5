use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::ygopro::constants::Restriction;

/// Where the engine asks for a card's ban status.
pub trait RestrictionLookup {
    fn restriction(&self, card_id: u32) -> Restriction;
}

/// One forbidden & limited list out of an `lflist.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LFList {
    name: String,
    limits: HashMap<u32, Restriction>
}

impl LFList {
    pub fn new(name: String) -> Self {
        Self {
            name,
            limits: HashMap::new()
        }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn len(&self) -> usize { self.limits.len() }
    pub fn is_empty(&self) -> bool { self.limits.is_empty() }

    pub fn set(&mut self, card_id: u32, restriction: Restriction) {
        self.limits.insert(card_id, restriction);
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Self>> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|err| anyhow!("Cannot open lflist {}: {}", path.display(), err))?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        let lflists = Self::from_string(&buf);
        info!("Loaded {} lflists from {}", lflists.len(), path.display());
        Ok(lflists)
    }

    pub fn from_string(str: &str) -> Vec<Self> {
        let mut loaded_lflists = Vec::new();
        let mut current_lflist: Option<LFList> = None;
        for line in str.lines() {
            let line = line.trim();
            if line.starts_with("#") {
                continue;
            } else if line.starts_with("!") {
                if let Some(lflist) = current_lflist.take() {
                    loaded_lflists.push(lflist);
                }
                current_lflist = Some(LFList::new(line[1..].trim().to_string()));
            } else {
                // Entries before the first header belong to no list.
                let lflist = match current_lflist.as_mut() {
                    Some(lflist) => lflist,
                    None => continue,
                };
                let parts = line.split_whitespace().collect::<Vec<&str>>();
                if parts.len() < 2 { continue; }
                let card_id = u32::from_str(parts[0]);
                let limit = u8::from_str(parts[1]).ok().and_then(|limit| Restriction::try_from(limit).ok());
                match (card_id, limit) {
                    (Ok(card_id), Some(limit)) => lflist.set(card_id, limit),
                    _ => trace!("Skip lflist line: {}", line),
                }
            }
        }
        if let Some(lflist) = current_lflist {
            loaded_lflists.push(lflist);
        }
        loaded_lflists
    }

    pub fn find<'a>(lflists: &'a [LFList], name: &str) -> Option<&'a LFList> {
        lflists.iter().find(|lflist| lflist.name == name)
    }
}

impl RestrictionLookup for LFList {
    fn restriction(&self, card_id: u32) -> Restriction {
        self.limits.get(&card_id).copied().unwrap_or_default()
    }
}
