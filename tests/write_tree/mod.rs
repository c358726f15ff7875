mod write_tree_object_successfully;
