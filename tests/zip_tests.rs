//! Integration tests for the variadic tuple zip.

use std::collections::{LinkedList, VecDeque};

use rebound::containers::{ForwardList, SinglyLinkedList, Vector};
use rebound::zip::zip_cursors;
use rstest::rstest;

#[rstest]
fn test_zip_yields_flat_tuples() {
    let numbers = vec![1, 2, 3];
    let letters: LinkedList<char> = "abc".chars().collect();
    let words: VecDeque<&str> = VecDeque::from(["x", "y", "z"]);
    let rows: Vec<_> = zip_cursors(&numbers, (&letters, &words)).collect();
    assert_eq!(rows, vec![(1, 'a', "x"), (2, 'b', "y"), (3, 'c', "z")]);
}

#[rstest]
#[case(vec![1, 2, 3], vec!['a'], 1)]
#[case(vec![1], vec!['a', 'b', 'c'], 1)]
#[case(vec![], vec!['a'], 0)]
#[case(vec![1, 2], vec!['a', 'b'], 2)]
fn test_zip_length_is_the_shortest_input(
    #[case] numbers: Vec<i32>,
    #[case] letters: Vec<char>,
    #[case] expected: usize,
) {
    assert_eq!(zip_cursors(&numbers, (&letters,)).count(), expected);
}

#[rstest]
fn test_zip_reports_exact_length_before_iterating() {
    let numbers: SinglyLinkedList<i32> = (0..10).collect();
    let text = String::from("four");
    let rows = zip_cursors(&numbers, (&text,));
    assert_eq!(rows.len(), 4);
}

#[rstest]
fn test_zip_does_not_modify_inputs() {
    let numbers = vec![1, 2];
    let letters = vec!['a', 'b'];
    let _ = zip_cursors(&numbers, (&letters,)).count();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(letters, vec!['a', 'b']);
}

#[rstest]
fn test_zip_over_extended_sources() {
    let numbers = Vector::new([1, 2, 3]);
    let list: ForwardList<bool> = [true, false].into_iter().collect();
    let rows: Vec<_> = zip_cursors(&numbers, (&list,)).collect();
    assert_eq!(rows, vec![(1, true), (2, false)]);
}

#[rstest]
fn test_zip_eight_containers() {
    let a = vec![1, 2];
    let b = vec!['b', 'B'];
    let c = String::from("cC");
    let d: LinkedList<u8> = [4, 40].into_iter().collect();
    let e: VecDeque<i64> = VecDeque::from([5, 50]);
    let f: SinglyLinkedList<bool> = [true, false].into_iter().collect();
    let g = vec!["g", "G"];
    let h = vec![8.0, 80.0];
    let rows: Vec<_> = zip_cursors(&a, (&b, &c, &d, &e, &f, &g, &h)).collect();
    assert_eq!(
        rows,
        vec![
            (1, 'b', 'c', 4, 5, true, "g", 8.0),
            (2, 'B', 'C', 40, 50, false, "G", 80.0),
        ]
    );
}

#[rstest]
fn test_zip_collects_into_any_container() {
    let numbers = vec![1, 2, 3];
    let squares = vec![1, 4, 9];
    let pairs: LinkedList<(i32, i32)> = zip_cursors(&numbers, (&squares,)).collect();
    assert_eq!(pairs.back(), Some(&(3, 9)));
}
