#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Payload parsing and the tree walks should never panic
        if let Ok(tree) = catpick::CategoryTree::from_json(content) {
            for (node, _) in tree.walk() {
                let _ = tree.breadcrumb(node.value(), " > ");
                let _ = tree.is_intermediate_node_with_children(node.value());
            }
        }
    }
});
