//! Property tests for the window manager.

use proptest::prelude::*;

use treelens::domain::services::{chunk_size_for, initial_visible, WindowPolicy, WindowState};
use treelens::domain::value_objects::{Address, NodePath};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The chunk never drops below the minimum and grows with the viewport.
    #[test]
    fn property_chunk_has_floor(px in 0u32..200_000, extra in 0u32..10_000) {
        let policy = WindowPolicy::default();
        let small = chunk_size_for(px, &policy);
        prop_assert!(small >= policy.min_chunk);
        prop_assert!(chunk_size_for(px + extra, &policy) >= small);
    }

    /// PROPERTY: grow is monotonic and never exceeds the collection length.
    #[test]
    fn property_grow_monotonic_and_bounded(
        len in 0usize..2_000,
        chunk in 1usize..300,
        steps in 1usize..12,
    ) {
        let mut window = WindowState::new(WindowPolicy::default(), chunk);
        let address = Address::root();
        let mut last = window.visible_count(&address, len);
        prop_assert!(last <= len);

        for _ in 0..steps {
            let next = window.grow(&address, len);
            prop_assert!(next >= last);
            prop_assert!(next <= len);
            prop_assert!(next == len || next == last + chunk);
            last = next;
        }
    }

    /// PROPERTY: Resizing never hides rows that were visible, and a
    /// collection the user grew never shows fewer items than one left alone.
    #[test]
    fn property_resize_never_shrinks(len in 0usize..2_000, first in 0u32..20_000, second in 0u32..20_000) {
        let policy = WindowPolicy::default();
        let mut window = WindowState::for_viewport(policy, first);
        let grown = Address::root();
        let untouched = NodePath::root().key("other").address();
        window.grow(&grown, len);
        let before = window.visible_count(&grown, len);
        let table_before = window.table_visible(len);

        window.resize(second);
        prop_assert!(window.visible_count(&grown, len) >= before);
        prop_assert!(window.visible_count(&grown, len) >= window.visible_count(&untouched, len));
        prop_assert!(window.table_visible(len) >= table_before);
    }

    /// PROPERTY: The first measurement sizes every window by the viewport alone.
    #[test]
    fn property_first_measurement_sets_window(len in 0usize..2_000, guess in 1usize..400, px in 0u32..20_000) {
        let policy = WindowPolicy::default();
        let mut window = WindowState::new(policy, guess);
        window.resize(px);
        let expected = initial_visible(len, chunk_size_for(px, &policy));
        prop_assert_eq!(window.visible_count(&Address::root(), len), expected);
        prop_assert_eq!(window.table_visible(len), expected);
    }
}
