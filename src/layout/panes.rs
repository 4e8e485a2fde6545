use std::collections::HashMap;

use super::disjoint_set::DisjointSet;
use super::resolve_link;
use crate::data::model::{ChannelMap, LinkKeyword};

/// Group axes returned by [`group_channels_into_axes`](super::group_channels_into_axes)
/// into panes by the `share_pane_with` hints of their channels.
///
/// A hint on any channel of an axis pulls the axis holding the target channel
/// into the same pane. Panes are ordered by their first axis, axes within a
/// pane keep their order from `axes`.
pub fn group_axes_into_panes(
    channels: &ChannelMap,
    axes: &[Vec<String>],
) -> Vec<Vec<Vec<String>>> {
    let path_to_axis: HashMap<&str, usize> = axes
        .iter()
        .enumerate()
        .flat_map(|(index, axis)| axis.iter().map(move |name| (name, index)))
        .filter_map(|(name, index)| Some((channels.get(name)?.path.as_str(), index)))
        .collect();

    let mut panes = DisjointSet::new(axes.len());
    for (index, axis) in axes.iter().enumerate() {
        for name in axis {
            if let Some(target) =
                resolve_link(channels, name, LinkKeyword::SharePaneWith, &path_to_axis)
            {
                panes.union(index, target);
            }
        }
    }

    panes
        .groups()
        .into_iter()
        .map(|pane| pane.into_iter().map(|index| axes[index].clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ChannelKind, ChannelSpec};

    fn axis(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn channels(entries: Vec<(&str, ChannelSpec)>) -> ChannelMap {
        entries
            .into_iter()
            .map(|(name, spec)| (name.to_string(), spec))
            .collect()
    }

    #[test]
    fn linked_axes_share_a_pane() {
        let channels = channels(vec![
            ("p", ChannelSpec::new(ChannelKind::Float, "/p")),
            (
                "q",
                ChannelSpec::new(ChannelKind::Float, "/q")
                    .with_link(LinkKeyword::SharePaneWith, "/r"),
            ),
            ("r", ChannelSpec::new(ChannelKind::Float, "/r")),
        ]);
        let axes = vec![axis(&["p"]), axis(&["q"]), axis(&["r"])];
        let panes = group_axes_into_panes(&channels, &axes);
        assert_eq!(
            panes,
            vec![vec![axis(&["p"])], vec![axis(&["q"]), axis(&["r"])]]
        );
    }

    #[test]
    fn backward_link_is_symmetric() {
        let channels = channels(vec![
            ("p", ChannelSpec::new(ChannelKind::Float, "/p")),
            ("q", ChannelSpec::new(ChannelKind::Float, "/q")),
            (
                "r",
                ChannelSpec::new(ChannelKind::Float, "/r")
                    .with_link(LinkKeyword::SharePaneWith, "/p"),
            ),
        ]);
        let axes = vec![axis(&["p"]), axis(&["q"]), axis(&["r"])];
        let panes = group_axes_into_panes(&channels, &axes);
        assert_eq!(
            panes,
            vec![vec![axis(&["p"]), axis(&["r"])], vec![axis(&["q"])]]
        );
    }

    #[test]
    fn links_from_any_member_of_an_axis_count() {
        let channels = channels(vec![
            ("a", ChannelSpec::new(ChannelKind::Float, "/a")),
            (
                "b",
                ChannelSpec::new(ChannelKind::Float, "/b")
                    .with_link(LinkKeyword::SharePaneWith, "/d"),
            ),
            ("c", ChannelSpec::new(ChannelKind::Float, "/c")),
            (
                "d",
                ChannelSpec::new(ChannelKind::Float, "/d")
                    .with_link(LinkKeyword::SharePaneWith, "/e"),
            ),
            ("e", ChannelSpec::new(ChannelKind::Float, "/e")),
        ]);
        let axes = vec![axis(&["a", "b"]), axis(&["c"]), axis(&["d"]), axis(&["e"])];
        let panes = group_axes_into_panes(&channels, &axes);
        assert_eq!(
            panes,
            vec![
                vec![axis(&["a", "b"]), axis(&["d"]), axis(&["e"])],
                vec![axis(&["c"])],
            ]
        );
    }

    #[test]
    fn unresolved_target_leaves_axis_alone() {
        let channels = channels(vec![
            (
                "a",
                ChannelSpec::new(ChannelKind::Float, "/a")
                    .with_link(LinkKeyword::SharePaneWith, "/nowhere"),
            ),
            ("b", ChannelSpec::new(ChannelKind::Float, "/b")),
        ]);
        let axes = vec![axis(&["a"]), axis(&["b"])];
        let panes = group_axes_into_panes(&channels, &axes);
        assert_eq!(panes, vec![vec![axis(&["a"])], vec![axis(&["b"])]]);
    }

    #[test]
    fn shared_path_resolves_to_the_later_axis() {
        let channels = channels(vec![
            ("x", ChannelSpec::new(ChannelKind::Float, "/s")),
            ("y", ChannelSpec::new(ChannelKind::Float, "/s")),
            (
                "z",
                ChannelSpec::new(ChannelKind::Float, "/z")
                    .with_link(LinkKeyword::SharePaneWith, "/s"),
            ),
        ]);
        let axes = vec![axis(&["x"]), axis(&["y"]), axis(&["z"])];
        let panes = group_axes_into_panes(&channels, &axes);
        assert_eq!(
            panes,
            vec![vec![axis(&["x"])], vec![axis(&["y"]), axis(&["z"])]]
        );

        let mut placed: Vec<&Vec<String>> = panes.iter().flatten().collect();
        placed.sort();
        assert_eq!(placed, axes.iter().collect::<Vec<_>>());
    }

    #[test]
    fn no_axes_no_panes() {
        assert!(group_axes_into_panes(&ChannelMap::new(), &[]).is_empty());
    }
}
