use indexmap::map::Entry;

use crate::tree::{LocaleTree, Mapping};

/// Overlay `translated` onto `existing`, recursing where both sides hold a map.
///
/// On any other collision the translated value wins. Existing keys keep their
/// position and new keys are appended, so no key from either side is lost.
pub fn merge_into(existing: &mut Mapping, translated: Mapping) {
    for (key, value) in translated {
        match existing.entry(key) {
            Entry::Occupied(mut slot) => match value {
                LocaleTree::Map(incoming) => {
                    if let LocaleTree::Map(current) = slot.get_mut() {
                        merge_into(current, incoming);
                    } else {
                        slot.insert(LocaleTree::Map(incoming));
                    }
                }
                value => {
                    slot.insert(value);
                }
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}
