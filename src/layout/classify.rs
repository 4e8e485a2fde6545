use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::data::model::{ChannelMap, ChannelSpec, LinkKeyword};
use crate::error::LayoutError;

/// Primary channel name → name of the channel holding its error bars.
pub type ErrorBarMap = BTreeMap<String, String>;

/// Extract the scalar channels of `channels` in display order, and match error
/// bar channels to the value channels they belong to.
///
/// Returns `(series, error_bars)`: the scalar channel names (error bars
/// excluded) sorted by descending priority and then path, and the error bar
/// association keyed by series name.
///
/// Negative-priority series are dropped from the end of the list, but at least
/// one series is always kept.
///
/// An `error_bar_for` hint pointing to a path that does not exist is logged;
/// the error bar channel is still withheld from the series list, keyed under
/// the unresolved path. Such a fallback entry never replaces or conflicts with
/// a resolved one, and is dropped when its key names a scalar channel.
pub fn extract_scalar_channels(
    channels: &ChannelMap,
) -> Result<(Vec<String>, ErrorBarMap), LayoutError> {
    let scalar: Vec<(&str, &ChannelSpec)> = channels
        .iter()
        .filter(|(_, spec)| spec.kind.is_scalar())
        .map(|(name, spec)| (name.as_str(), spec))
        .collect();

    let path_to_name: HashMap<&str, &str> = scalar
        .iter()
        .map(|&(name, spec)| (spec.path.as_str(), name))
        .collect();

    let mut error_bars = ErrorBarMap::new();
    let mut unresolved: Vec<(&str, &str)> = Vec::new();
    for &(name, spec) in &scalar {
        let Some(target_path) = spec.display_hints.link(LinkKeyword::ErrorBarFor) else {
            continue;
        };

        let Some(&target) = path_to_name.get(target_path) else {
            match channels.get(target_path) {
                // Older metadata used the short channel name here.
                Some(named) => log::warn!(
                    "Error bar target '{target_path}' does not exist; \
                     did you mean to specify the full path '{}'?",
                    named.path
                ),
                None => log::warn!("Error bar target '{target_path}' does not exist"),
            }
            unresolved.push((target_path, name));
            continue;
        };

        if let Some(existing) = error_bars.get(target) {
            return Err(LayoutError::DuplicateErrorBar {
                target_path: target_path.to_string(),
                existing: existing.clone(),
                duplicate: name.to_string(),
            });
        }
        error_bars.insert(target.to_string(), name.to_string());
    }

    // Every error bar channel stays out of the series list, resolved or not.
    let error_bar_names: BTreeSet<String> = error_bars
        .values()
        .cloned()
        .chain(unresolved.iter().map(|&(_, name)| name.to_string()))
        .collect();

    // Unresolved entries are keyed by their literal target path, unless that
    // would read as the error bars of a real channel.
    for &(target_path, name) in &unresolved {
        if channels.get(target_path).is_some_and(|c| c.kind.is_scalar()) {
            continue;
        }
        error_bars
            .entry(target_path.to_string())
            .or_insert_with(|| name.to_string());
    }

    let mut series: Vec<(&str, &ChannelSpec)> = scalar
        .into_iter()
        .filter(|(name, _)| !error_bar_names.contains(*name))
        .collect();

    series.sort_by(|(_, a), (_, b)| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| a.path.cmp(&b.path))
    });

    while series.len() > 1 {
        let Some(&(name, spec)) = series.last() else {
            break;
        };
        if spec.priority() >= 0 {
            break;
        }
        error_bars.remove(name);
        series.pop();
    }

    let series = series.into_iter().map(|(name, _)| name.to_string()).collect();
    Ok((series, error_bars))
}
