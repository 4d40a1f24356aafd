use crate::heap::DHeap;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Checks that every live slot is no smaller than its parent.
pub fn assert_heap_ordered<T: Ord + std::fmt::Debug>(heap: &DHeap<T>) {
    for i in 2..=heap.size() {
        let p = heap.parent_index(i).unwrap();
        let parent = heap.get(p).unwrap();
        let child = heap.get(i).unwrap();
        assert!(
            parent <= child,
            "slot {} ({:?}) is smaller than its parent slot {} ({:?})",
            i,
            child,
            p,
            parent
        );
    }
}
