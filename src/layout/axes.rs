use std::collections::HashMap;

use super::disjoint_set::DisjointSet;
use super::resolve_link;
use crate::data::model::{ChannelMap, LinkKeyword};

/// Group channels into axes by their `share_axis_with` display hints.
///
/// `names` sets the order of the results: channels on each axis keep their
/// relative order from `names`, and axes are ordered by their first channel.
///
/// A hint links two channels symmetrically, so the grouping is the transitive
/// closure of all links no matter which side of a pair declared it. Hints can
/// only target channels among `names`; other targets are logged and ignored.
pub fn group_channels_into_axes(channels: &ChannelMap, names: &[String]) -> Vec<Vec<String>> {
    let path_to_index: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .filter_map(|(index, name)| Some((channels.get(name)?.path.as_str(), index)))
        .collect();

    let edges: Vec<(usize, usize)> = names
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let target = resolve_link(channels, name, LinkKeyword::ShareAxisWith, &path_to_index)?;
            Some((index, target))
        })
        .collect();

    let mut axes = DisjointSet::new(names.len());
    for (a, b) in edges {
        axes.union(a, b);
    }

    axes.groups()
        .into_iter()
        .map(|axis| axis.into_iter().map(|index| names[index].clone()).collect())
        .collect()
}
