use crate::gallery::model::{KitchenStyle, Project, Room, RoomFilter, StyleFilter};

/// Number of cards revealed at first and on every "View More".
pub const PAGE_SIZE: usize = 2;
pub const ITEMS_PER_ROW: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Everything the product gallery shows is derived from this struct.
/// Mutators return `true` when something visible changed.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    projects: Vec<Project>,
    load: LoadState,
    room: RoomFilter,
    style: StyleFilter,
    visible_count: usize,
    expanded: Option<String>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            load: LoadState::Loading,
            room: RoomFilter::All,
            style: StyleFilter::All,
            visible_count: PAGE_SIZE,
            expanded: None,
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn room(&self) -> RoomFilter {
        self.room
    }

    pub fn style(&self) -> StyleFilter {
        self.style
    }

    #[cfg(test)]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn loaded(&mut self, projects: Vec<Project>) -> bool {
        self.projects = projects;
        self.load = LoadState::Ready;
        self.reset_view();
        true
    }

    pub fn failed(&mut self, message: impl Into<String>) -> bool {
        self.projects.clear();
        self.load = LoadState::Failed(message.into());
        self.reset_view();
        true
    }

    pub fn select_room(&mut self, room: RoomFilter) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.room = room;
        self.reset_view();
        true
    }

    pub fn select_style(&mut self, style: StyleFilter) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.style = style;
        self.reset_view();
        true
    }

    pub fn load_more(&mut self) -> bool {
        if !self.is_ready() || !self.has_more() {
            return false;
        }
        self.visible_count += PAGE_SIZE;
        true
    }

    pub fn toggle_expand(&mut self, id: &str) -> bool {
        if !self.is_ready() {
            return false;
        }
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
            return true;
        }
        if !self.filtered().any(|project| project.id == id) {
            return false;
        }
        self.expanded = Some(id.to_string());
        true
    }

    pub fn collapse(&mut self) -> bool {
        self.expanded.take().is_some()
    }

    /// The style filter only narrows results while the kitchen is selected;
    /// otherwise the stored value is kept but ignored.
    fn effective_style(&self) -> StyleFilter {
        if self.room.is_kitchen() {
            self.style
        } else {
            StyleFilter::All
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Project> + '_ {
        let room = self.room;
        let style = self.effective_style();
        self.projects
            .iter()
            .filter(move |project| room.matches(project.room) && style.matches(project.style))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn visible_slice(&self) -> Vec<&Project> {
        self.filtered().take(self.visible_count).collect()
    }

    pub fn rows(&self) -> Vec<Vec<&Project>> {
        self.visible_slice()
            .chunks(ITEMS_PER_ROW)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.is_ready() && self.visible_count < self.filtered_len()
    }

    pub fn expanded_project(&self) -> Option<&Project> {
        let id = self.expanded.as_deref()?;
        self.projects.iter().find(|project| project.id == id)
    }

    fn reset_view(&mut self) {
        self.visible_count = PAGE_SIZE;
        self.expanded = None;
    }
}

/// Convenience for the filter bar: the kitchen style row is only offered
/// while the kitchen is selected.
pub fn style_options(room: RoomFilter) -> &'static [KitchenStyle] {
    if room == RoomFilter::Only(Room::Kitchen) {
        &KitchenStyle::ALL
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, room: Option<Room>, style: Option<KitchenStyle>) -> Project {
        Project::new(id, format!("Project {}", id), room, style, format!("https://img/{}.avif", id))
    }

    /// 5 Kitchen/Modern records interleaved with 3 Living ones.
    fn sample() -> Vec<Project> {
        vec![
            project("k1", Some(Room::Kitchen), Some(KitchenStyle::Modern)),
            project("l1", Some(Room::Living), None),
            project("k2", Some(Room::Kitchen), Some(KitchenStyle::Modern)),
            project("k3", Some(Room::Kitchen), Some(KitchenStyle::Modern)),
            project("l2", Some(Room::Living), None),
            project("k4", Some(Room::Kitchen), Some(KitchenStyle::Modern)),
            project("l3", Some(Room::Living), None),
            project("k5", Some(Room::Kitchen), Some(KitchenStyle::Modern)),
        ]
    }

    fn ready(projects: Vec<Project>) -> GalleryState {
        let mut state = GalleryState::new();
        state.loaded(projects);
        state
    }

    fn ids(state: &GalleryState) -> Vec<&str> {
        state.visible_slice().into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn kitchen_modern_paginates_in_fetch_order() {
        let mut state = ready(sample());
        state.select_room(RoomFilter::Only(Room::Kitchen));
        state.select_style(StyleFilter::Only(KitchenStyle::Modern));

        assert_eq!(ids(&state), vec!["k1", "k2"]);
        assert!(state.has_more());

        assert!(state.load_more());
        assert_eq!(ids(&state), vec!["k1", "k2", "k3", "k4"]);

        assert!(state.load_more());
        assert_eq!(ids(&state), vec!["k1", "k2", "k3", "k4", "k5"]);
        assert!(!state.has_more());
    }

    #[test]
    fn load_more_is_noop_once_saturated() {
        let mut state = ready(sample());
        state.select_room(RoomFilter::Only(Room::Living));
        assert!(state.load_more());
        assert_eq!(state.visible_slice().len(), 3);

        let before = state.clone();
        assert!(!state.load_more());
        assert_eq!(state, before);
    }

    #[test]
    fn style_filter_ignored_outside_kitchen() {
        let mut projects = sample();
        projects.push(project("x1", Some(Room::Living), Some(KitchenStyle::Traditional)));

        for room in Room::ALL.into_iter().filter(|r| *r != Room::Kitchen) {
            let mut unstyled = ready(projects.clone());
            unstyled.select_room(RoomFilter::Only(room));

            for style in KitchenStyle::ALL {
                let mut styled = ready(projects.clone());
                styled.select_style(StyleFilter::Only(style));
                styled.select_room(RoomFilter::Only(room));
                assert_eq!(styled.filtered_len(), unstyled.filtered_len());
            }
        }
    }

    #[test]
    fn room_all_ignores_style() {
        let mut projects = sample();
        projects.push(project("u1", None, None));
        let mut state = ready(projects.clone());
        state.select_style(StyleFilter::Only(KitchenStyle::ArtDeco));

        assert_eq!(state.room(), RoomFilter::All);
        assert_eq!(state.filtered_len(), projects.len());
    }

    #[test]
    fn stored_style_applies_again_when_kitchen_reselected() {
        let mut projects = sample();
        projects.push(project("k6", Some(Room::Kitchen), Some(KitchenStyle::ArtDeco)));
        let mut state = ready(projects);
        state.select_room(RoomFilter::Only(Room::Kitchen));
        state.select_style(StyleFilter::Only(KitchenStyle::ArtDeco));
        assert_eq!(state.filtered_len(), 1);

        state.select_room(RoomFilter::Only(Room::Living));
        assert_eq!(state.style(), StyleFilter::Only(KitchenStyle::ArtDeco));
        assert_eq!(state.filtered_len(), 3);

        state.select_room(RoomFilter::Only(Room::Kitchen));
        assert_eq!(state.filtered_len(), 1);
    }

    #[test]
    fn visible_len_is_min_of_count_and_filtered() {
        let mut state = ready(sample());
        for _ in 0..6 {
            let expected = state.visible_count().min(state.filtered_len());
            assert_eq!(state.visible_slice().len(), expected);
            state.load_more();
        }
    }

    #[test]
    fn filter_change_resets_page_and_expansion_even_if_set_unchanged() {
        let mut state = ready(sample());
        state.load_more();
        state.toggle_expand("k1");
        assert_eq!(state.visible_count(), 4);

        assert!(state.select_room(RoomFilter::All));
        assert_eq!(state.visible_count(), PAGE_SIZE);
        assert_eq!(state.expanded_id(), None);

        state.load_more();
        state.toggle_expand("l1");
        assert!(state.select_style(StyleFilter::All));
        assert_eq!(state.visible_count(), PAGE_SIZE);
        assert_eq!(state.expanded_id(), None);
    }

    #[test]
    fn toggle_expand_keeps_single_open_item() {
        let mut state = ready(sample());
        state.toggle_expand("k1");
        state.toggle_expand("k1");
        assert_eq!(state.expanded_id(), None);

        state.toggle_expand("k1");
        state.toggle_expand("l1");
        assert_eq!(state.expanded_id(), Some("l1"));
        assert_eq!(state.expanded_project().map(|p| p.title.as_str()), Some("Project l1"));

        assert!(state.collapse());
        assert!(!state.collapse());
    }

    #[test]
    fn toggle_expand_ignores_ids_outside_filter() {
        let mut state = ready(sample());
        state.select_room(RoomFilter::Only(Room::Living));
        assert!(!state.toggle_expand("k1"));
        assert!(!state.toggle_expand("missing"));
        assert_eq!(state.expanded_id(), None);
    }

    #[test]
    fn empty_filter_result_is_not_an_error() {
        let mut state = ready(sample());
        state.select_room(RoomFilter::Only(Room::Outdoor));
        assert!(state.visible_slice().is_empty());
        assert!(state.rows().is_empty());
        assert!(!state.has_more());
        assert!(state.is_ready());
    }

    #[test]
    fn failed_fetch_blocks_all_controls() {
        let mut state = GalleryState::new();
        state.failed("Network error: offline");

        assert_eq!(state.load_state(), &LoadState::Failed("Network error: offline".into()));
        assert!(state.visible_slice().is_empty());
        assert!(!state.has_more());
        assert!(!state.load_more());
        assert!(!state.select_room(RoomFilter::Only(Room::Kitchen)));
        assert!(!state.toggle_expand("k1"));
    }

    #[test]
    fn loading_state_shows_nothing() {
        let state = GalleryState::new();
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert!(!state.has_more());
        assert!(state.rows().is_empty());
    }

    #[test]
    fn rows_are_chunked_in_pairs() {
        let mut state = ready(sample());
        state.load_more();
        state.load_more();
        let rows = state.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == ITEMS_PER_ROW));
    }

    #[test]
    fn style_row_only_for_kitchen() {
        assert_eq!(style_options(RoomFilter::Only(Room::Kitchen)).len(), 3);
        assert!(style_options(RoomFilter::All).is_empty());
        assert!(style_options(RoomFilter::Only(Room::Bath)).is_empty());
    }

    #[test]
    fn empty_and_single_collections() {
        let state = ready(Vec::new());
        assert!(state.visible_slice().is_empty());
        assert!(state.rows().is_empty());
        assert!(!state.has_more());

        let mut state = ready(vec![project("k1", Some(Room::Kitchen), None)]);
        assert_eq!(ids(&state), vec!["k1"]);
        assert!(!state.has_more());
        assert!(!state.load_more());
    }

    #[test]
    fn expanding_unrevealed_match_then_filtering_clears_it() {
        let mut state = ready(sample());
        assert!(!ids(&state).contains(&"k5"));
        assert!(state.toggle_expand("k5"));
        assert_eq!(state.expanded_id(), Some("k5"));

        state.select_room(RoomFilter::Only(Room::Kitchen));
        assert_eq!(state.expanded_id(), None);
        assert_eq!(state.visible_count(), PAGE_SIZE);
    }

    #[test]
    fn reload_resets_visible_count() {
        let mut state = ready(sample());
        state.load_more();
        state.load_more();
        assert_eq!(state.visible_count(), 3 * PAGE_SIZE);

        state.loaded(sample());
        assert_eq!(state.visible_count(), PAGE_SIZE);
        assert_eq!(ids(&state), vec!["k1", "l1"]);
    }
}
