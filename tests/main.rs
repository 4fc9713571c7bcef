use min_heap::{Cursor, CursorMut, MinHeap, MIN_SLOTS};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn compact<T: std::fmt::Display>(heap: &MinHeap<T>) -> String {
    let mut out = String::new();
    heap.print(&mut out, false).unwrap();
    out
}

fn complete<T: std::fmt::Display>(heap: &MinHeap<T>) -> String {
    let mut out = String::new();
    heap.print(&mut out, true).unwrap();
    out
}

/// Inserts `value`, which must not be in the heap yet, and checks that the
/// heap stayed consistent.
fn checked_insert(heap: &mut MinHeap<String>, value: &str) {
    let len = heap.len();
    assert!(!heap.exists(value));

    heap.insert(value.to_string());
    assert_eq!(heap.len(), len + 1);
    assert!(heap.exists(value));
    assert!(heap.check_integrity());
}

/// Deletes the unique minimum and checks that the heap stayed consistent.
fn checked_delete(heap: &mut MinHeap<String>) {
    let len = heap.len();
    let min = heap.peek_min().cloned().unwrap();
    assert!(heap.exists(&min));

    heap.delete_min();
    assert!(!heap.exists(&min));
    assert_eq!(heap.len(), len - 1);
    assert!(heap.check_integrity());
}

fn colors() -> MinHeap<String> {
    let mut heap = MinHeap::new();
    for color in ["orange", "blue", "yellow", "green", "red"] {
        checked_insert(&mut heap, color);
    }
    heap
}

#[test]
fn test_empty_print() {
    let heap = MinHeap::<String>::new();
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), MIN_SLOTS);
    assert_eq!(compact(&heap), "[]");
    assert_eq!(complete(&heap), "[x,_]");
    assert_eq!(heap.to_string(), "[]");
    assert_eq!(heap.layout().to_string(), "[x,_]");
}

#[test]
fn test_insert_grows_store() {
    let mut heap = MinHeap::new();

    checked_insert(&mut heap, "orange");
    assert_eq!(heap.peek_min().unwrap(), "orange");
    assert_eq!(compact(&heap), "[orange]");
    assert_eq!(complete(&heap), "[x,orange]");

    checked_insert(&mut heap, "blue");
    assert_eq!(heap.peek_min().unwrap(), "blue");
    assert_eq!(heap.capacity(), 4);
    assert_eq!(compact(&heap), "[blue,orange]");
    assert_eq!(complete(&heap), "[x,blue,orange,_]");

    checked_insert(&mut heap, "yellow");
    assert_eq!(heap.to_string(), "[blue,orange,yellow]");
    assert_eq!(complete(&heap), "[x,blue,orange,yellow]");

    checked_insert(&mut heap, "green");
    assert_eq!(heap.capacity(), 8);
    assert_eq!(compact(&heap), "[blue,green,yellow,orange]");
    assert_eq!(complete(&heap), "[x,blue,green,yellow,orange,_,_,_]");

    checked_insert(&mut heap, "red");
    assert_eq!(heap.to_string(), "[blue,green,yellow,orange,red]");
    assert_eq!(heap.layout().to_string(), "[x,blue,green,yellow,orange,red,_,_]");
}

#[test]
fn test_clone_is_independent() {
    let h1 = colors();
    let mut h2 = h1.clone();
    assert_eq!(h1, h2);
    assert!(h1.iter().eq(h2.iter()));
    assert_eq!(h1.capacity(), h2.capacity());

    checked_insert(&mut h2, "aquamarine");
    assert_eq!(h2.peek_min().unwrap(), "aquamarine");
    assert_eq!(h1.peek_min().unwrap(), "blue");
    assert_eq!(h1.len(), 5);
    assert_eq!(h1.to_string(), "[blue,green,yellow,orange,red]");
    assert_ne!(h1, h2);
    assert!(!h1.iter().eq(h2.iter()));

    h2.delete_min();
    h2.delete_min();
    assert_eq!(h1.len(), 5);
    assert_eq!(h1.peek_min().unwrap(), "blue");
}

#[test]
fn test_clone_from() {
    let mut h1 = colors();
    let mut h3 = MinHeap::new();
    assert_ne!(h1, h3);

    h3.clone_from(&h1);
    assert_eq!(h1, h3);
    assert!(h1.iter().eq(h3.iter()));

    checked_insert(&mut h1, "purple");
    checked_insert(&mut h3, "violet");
    assert_ne!(h1, h3);
    assert!(!h1.iter().eq(h3.iter()));
}

#[test]
fn test_swap() {
    let mut h2 = colors();
    checked_insert(&mut h2, "aquamarine");

    let mut h4 = MinHeap::new();
    checked_insert(&mut h4, "white");
    checked_insert(&mut h4, "black");

    h2.swap(&mut h4);

    assert_eq!(h2.peek_min().unwrap(), "black");
    assert!(h2.exists("white"));
    assert_eq!(h2.len(), 2);
    assert_eq!(complete(&h2), "[x,black,white,_]");

    assert_eq!(h4.peek_min().unwrap(), "aquamarine");
    assert!(h4.exists("green"));
    assert_eq!(h4.len(), 6);
    assert_eq!(complete(&h4), "[x,aquamarine,green,blue,orange,red,yellow,_]");
}

#[test]
fn test_eq_ignores_layout() {
    let mut h1 = colors();
    checked_insert(&mut h1, "purple");

    let mut h5 = MinHeap::new();
    for color in ["blue", "green", "orange", "purple", "red", "yellow"] {
        h5.insert(color.to_string());
    }
    assert_eq!(h1, h5);
    assert!(!h1.iter().eq(h5.iter()));

    h5.insert("grey".to_string());
    assert_ne!(h1, h5);
}

#[test]
fn test_eq_counts_duplicates() {
    let a = MinHeap::from([1, 1, 2]);
    let b = MinHeap::from([1, 2, 2]);
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);

    let c = MinHeap::from([2, 1, 1]);
    assert_eq!(a, c);
}

#[test]
fn test_delete_min_shrinks_store() {
    let mut h1 = colors();
    checked_insert(&mut h1, "purple");
    assert_eq!(complete(&h1), "[x,blue,green,purple,orange,red,yellow,_]");

    checked_delete(&mut h1);
    assert_eq!(h1.peek_min().unwrap(), "green");
    assert_eq!(complete(&h1), "[x,green,orange,purple,yellow,red,_,_]");

    checked_delete(&mut h1);
    assert_eq!(h1.peek_min().unwrap(), "orange");
    assert_eq!(complete(&h1), "[x,orange,red,purple,yellow,_,_,_]");

    checked_delete(&mut h1);
    assert_eq!(h1.peek_min().unwrap(), "purple");
    assert_eq!(complete(&h1), "[x,purple,red,yellow,_,_,_,_]");

    checked_delete(&mut h1);
    assert_eq!(h1.peek_min().unwrap(), "red");
    assert_eq!(complete(&h1), "[x,red,yellow,_]");

    checked_delete(&mut h1);
    assert_eq!(h1.peek_min().unwrap(), "yellow");
    assert_eq!(complete(&h1), "[x,yellow]");

    checked_delete(&mut h1);
    assert!(h1.is_empty());
    assert_eq!(h1.capacity(), MIN_SLOTS);
    assert_eq!(complete(&h1), "[x,_]");
}

#[test]
#[should_panic(expected = "empty MinHeap")]
fn test_delete_min_on_empty() {
    let mut heap = MinHeap::<i32>::new();
    heap.delete_min();
}

#[test]
fn test_empty_pop_and_peek() {
    let mut heap = MinHeap::<i32>::new();
    assert!(heap.pop_min().is_none());
    assert!(heap.peek_min().is_none());
    assert_eq!(heap.capacity(), MIN_SLOTS);
}

#[test]
fn test_heap_sort() {
    const TEST_SIZE: usize = 1000;

    let mut numbers: Vec<usize> = (0..TEST_SIZE).collect();
    let mut rng = XorShiftRng::seed_from_u64(1985);
    for _ in 0..16 {
        numbers.shuffle(&mut rng);
    }

    let mut heap = MinHeap::new();
    for &n in &numbers {
        heap.insert(n);
    }
    assert!(heap.check_integrity());
    assert_eq!(heap.len(), TEST_SIZE);

    for i in 0..TEST_SIZE {
        assert_eq!(heap.peek_min(), Some(&i));
        heap.delete_min();
    }
    assert!(heap.is_empty());
}

#[test]
fn test_size_and_integrity_under_random_ops() {
    let mut rng = XorShiftRng::seed_from_u64(42);
    let mut values: Vec<i32> = (0..300).map(|i| i % 37).collect();
    values.shuffle(&mut rng);

    let mut heap = MinHeap::new();
    let mut inserted = 0;
    let mut deleted = 0;
    for (i, value) in values.into_iter().enumerate() {
        heap.insert(value);
        inserted += 1;
        if i % 3 == 2 {
            heap.delete_min();
            deleted += 1;
        }
        assert!(heap.check_integrity());
        assert_eq!(heap.len(), inserted - deleted);
        assert!(heap.len() < heap.capacity());
    }

    let sorted = heap.clone().into_sorted_vec();
    let mut expected = heap.into_vec();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn test_exists_prunes_but_finds() {
    let heap = MinHeap::from([5, 9, 3, 7, 1, 8, 2, 6, 4]);
    for v in 1..=9 {
        assert!(heap.exists(&v));
    }
    assert!(!heap.exists(&0));
    assert!(!heap.exists(&10));
}

#[test]
fn test_exists_after_removal() {
    let mut heap = MinHeap::from([4, 1, 3]);
    assert!(heap.exists(&1));
    heap.delete_min();
    assert!(!heap.exists(&1));
    assert!(heap.exists(&3));
}

#[test]
fn test_insert_unique() {
    let mut heap = MinHeap::new();
    assert!(heap.insert_unique(0.0_f64.to_bits()));
    assert!(heap.insert_unique(1.0_f64.to_bits()));
    assert!(!heap.insert_unique((4.0_f64 / 2.0 - 1.0).to_bits()));
    assert!(heap.insert_unique(3.0_f64.to_bits()));
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_with_capacity_and_clear() {
    let mut heap = MinHeap::with_capacity(7);
    assert_eq!(heap.capacity(), 8);
    for i in 0..7 {
        heap.insert(i);
    }
    assert_eq!(heap.capacity(), 8);
    heap.insert(7);
    assert_eq!(heap.capacity(), 16);

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.capacity(), MIN_SLOTS);
    assert_eq!(heap.layout().to_string(), "[x,_]");
}

#[test]
fn test_iterator() {
    let heap = MinHeap::from(vec![5, 9, 3]);
    let iterout = [3, 9, 5];
    let mut i = 0;
    for el in &heap {
        assert_eq!(*el, iterout[i]);
        i += 1;
    }
    assert_eq!(i, 3);
}

#[test]
fn test_iter_rev_cloned_collect() {
    let heap = MinHeap::from(vec![5, 9, 3]);
    let v: Vec<_> = heap.iter().rev().cloned().collect();
    assert_eq!(v, vec![5, 9, 3]);
}

#[test]
fn test_iter_mut() {
    let mut heap = MinHeap::from([1, 2, 3]);
    for x in &mut heap {
        *x *= 10;
    }
    assert_eq!(heap.into_vec(), [10, 20, 30]);
}

#[test]
fn test_into_iter_sorted_collect() {
    let heap = MinHeap::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let sorted = heap.into_iter_sorted().collect::<Vec<_>>();
    assert_eq!(sorted, vec![0, 1, 1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

fn check_exact_size_iterator<I: ExactSizeIterator>(len: usize, it: I) {
    let mut it = it;

    for i in 0..it.len() {
        let (lower, upper) = it.size_hint();
        assert_eq!(Some(lower), upper);
        assert_eq!(lower, len - i);
        assert_eq!(it.len(), len - i);
        it.next();
    }
    assert_eq!(it.len(), 0);
}

#[test]
fn test_exact_size_iterator() {
    let mut heap = MinHeap::from(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1]);
    let len = heap.len();
    check_exact_size_iterator(len, heap.iter());
    check_exact_size_iterator(len, heap.iter_mut());
    check_exact_size_iterator(len, heap.clone().into_iter());
    check_exact_size_iterator(len, heap.clone().into_iter_sorted());
}

#[test]
fn test_from_iter_and_extend() {
    let xs = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
    let mut q: MinHeap<_> = xs.iter().cloned().collect();
    q.extend(&[0, 10]);
    q.extend(vec![11]);

    assert_eq!(q.len(), 12);
    assert_eq!(q.into_sorted_vec(), (0..12).collect::<Vec<_>>());
}

#[test]
fn test_debug() {
    let heap = MinHeap::from([2, 1]);
    assert_eq!(format!("{:?}", heap), "[1, 2]");
}

#[test]
fn test_default_cursors_are_equal() {
    let d1 = Cursor::<f64>::default();
    let d2 = Cursor::<f64>::default();
    assert_eq!(d1, d2);
    assert_eq!(d1.get(), None);
    assert_eq!(d1.offset(), None);

    let m1 = CursorMut::<f64>::default();
    let m2 = CursorMut::<f64>::default();
    assert_eq!(m1, m2);
}

#[test]
#[should_panic(expected = "detached cursor")]
fn test_default_cursor_cannot_move() {
    let mut cursor = Cursor::<i32>::default();
    cursor.move_next();
}

#[test]
#[should_panic(expected = "past the end")]
fn test_cursor_cannot_pass_end() {
    let heap = MinHeap::from([1]);
    let mut cursor = heap.end();
    cursor.move_next();
}

#[test]
#[should_panic(expected = "before the beginning")]
fn test_cursor_cannot_precede_begin() {
    let heap = MinHeap::from([1]);
    let mut cursor = heap.begin();
    cursor.move_prev();
}

#[test]
fn test_cursor_copy_and_step() {
    let heap = MinHeap::from(['f', 'g']);

    let mut i1 = heap.begin();
    let i2 = i1;
    assert_eq!(i1, i2);
    assert_eq!(i1.get(), i2.get());
    i1.move_next();
    assert_ne!(i1, i2);

    let mut i3 = heap.begin();
    i3.move_next();
    assert_eq!(i3, i1);
    assert_eq!(i3.get(), Some(&'g'));
}

#[test]
fn test_cursors_of_different_heaps_differ() {
    let a = MinHeap::from([1]);
    let b = a.clone();
    assert_ne!(a.begin(), b.begin());
    assert_ne!(a.begin(), Cursor::default());
}

#[test]
fn test_cursor_mut_converts_to_cursor() {
    let mut heap = MinHeap::from(['f', 'g']);

    let mut cursor = heap.begin_mut();
    cursor.move_next();
    assert_eq!(cursor.as_cursor().get(), Some(&'g'));
    assert_eq!(cursor.as_cursor().offset(), Some(1));

    let read_only: Cursor<'_, char> = cursor.into();
    assert_eq!(read_only.offset(), Some(1));
    assert_eq!(read_only.get(), Some(&'g'));
}

#[test]
fn test_cursor_mut_edits_in_place() {
    let mut heap = MinHeap::new();
    heap.insert(String::from("blueberry"));
    heap.insert(String::from("pear"));
    heap.insert(String::from("mango"));

    let mut cursor = heap.begin_mut();
    *cursor.get_mut().unwrap() = String::from("blackberry");
    cursor.get_mut().unwrap().truncate(6);
    assert_eq!(cursor.get().map(String::as_str), Some("blackb"));

    let mut end = heap.end_mut();
    assert_eq!(end.get_mut(), None);
    end.move_prev();
    assert_eq!(end.get().map(String::as_str), Some("mango"));

    assert_eq!(heap.peek_min().map(String::as_str), Some("blackb"));
}

#[test]
fn test_cursor_traversal() {
    let mut heap = MinHeap::new();
    assert_eq!(heap.begin(), heap.end());

    for c in 'a'..='z' {
        heap.insert(c.to_string());
    }
    assert_ne!(heap.begin(), heap.end());

    // Forward.
    let mut forward = Vec::new();
    let mut j = heap.begin();
    let mut i = heap.begin();
    while i != heap.end() {
        let item = i.get().unwrap();
        assert_eq!(item.len(), 1);
        assert_eq!(i, j);
        j.move_next();
        assert_ne!(i, j);
        forward.push(item.clone());
        i.move_next();
    }
    assert_eq!(forward.len(), 26);
    let expected: Vec<String> = ('a'..='z').map(|c| c.to_string()).collect();
    assert_eq!(forward, expected);

    // Backward.
    let mut backward = Vec::new();
    let mut j = heap.end();
    let mut i = heap.end();
    i.move_prev();
    loop {
        let item = i.get().unwrap();
        assert_ne!(i, j);
        j.move_prev();
        assert_eq!(i, j);
        backward.push(item.clone());
        if i == heap.begin() {
            break;
        }
        i.move_prev();
    }
    backward.reverse();
    assert_eq!(forward, backward);
}
