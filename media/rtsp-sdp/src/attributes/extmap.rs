use crate::{Attributes, CVO_EXTENSION_URN, number};

/// Find the id of the first extmap whose value is the CVO extension URN
///
/// The id is read from the digits following the last `:` of the attribute's key (`a=extmap:<id>`).
pub(crate) fn cvo_ext_map_id(attributes: &Attributes) -> Option<u32> {
    let (key, _) = attributes
        .iter()
        .find(|(_, value)| &***value == CVO_EXTENSION_URN)?;

    let Some((_, suffix)) = key.rsplit_once(':') else {
        log::warn!("attribute '{key}' carries the CVO extension but no extension id");
        return None;
    };

    match number(suffix) {
        Ok((_, id)) => Some(id),
        Err(_) => {
            log::warn!("attribute '{key}' carries the CVO extension with an invalid id");
            None
        }
    }
}
