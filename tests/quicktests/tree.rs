use dsa::bst::BinarySearchTree;

use std::collections::HashSet;

use crate::init_logging;

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        init_logging();
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_logging();
        let mut tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let mut still_present = xs;
        for delete in &deletes {
            let before = tree.count_nodes();
            tree = tree.delete(delete);
            // Exactly one copy goes, if there was one.
            match still_present.iter().position(|x| x == delete) {
                Some(pos) => {
                    still_present.swap_remove(pos);
                    if tree.count_nodes() != before - 1 {
                        return false;
                    }
                }
                None => {
                    if tree.count_nodes() != before {
                        return false;
                    }
                }
            }
        }

        still_present.sort();
        tree.inorder() == still_present.iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn height_bounds(xs: Vec<u8>) -> bool {
        let tree: BinarySearchTree<_> = xs.iter().copied().collect();
        let n = tree.count_nodes() as isize;

        // Between a complete tree and a list.
        let at_least = (usize::BITS - (n as usize).leading_zeros()) as isize - 1;
        tree.height() <= n - 1 && tree.height() >= at_least
    }
}
