use crate::types::SeedConcept;

/// Hand-curated concepts the catalogue is built from.
pub const BASE_CONCEPTS: &[SeedConcept] = &[
    SeedConcept {
        key: "array",
        name: "Array",
        kind: "linear_structure",
        category: "data_structure",
        basic_ops: &["access", "update", "insert", "delete"],
        principle: "Contiguous memory block",
        description: "A basic linear structure storing elements in contiguous memory.",
    },
    SeedConcept {
        key: "matrix",
        name: "Matrix",
        kind: "2d_array",
        category: "data_structure",
        basic_ops: &["row_access", "col_access", "transform"],
        principle: "2D array stored in row-major or column-major order.",
        description: "A two-dimensional array structure used for tabular representation.",
    },
    SeedConcept {
        key: "sequential_list",
        name: "Sequential List",
        kind: "array_based_list",
        category: "data_structure",
        basic_ops: &["insert", "delete", "search"],
        principle: "List implemented using arrays.",
        description: "A list stored as a dynamic array supporting sequential access.",
    },
    SeedConcept {
        key: "linked_list",
        name: "Singly Linked List",
        kind: "linked_structure",
        category: "data_structure",
        basic_ops: &["insert", "delete", "traverse", "search"],
        principle: "Nodes connected via next pointers.",
        description: "A dynamic list of nodes where each node links to the next.",
    },
    SeedConcept {
        key: "doubly_linked_list",
        name: "Doubly Linked List",
        kind: "linked_structure",
        category: "data_structure",
        basic_ops: &["insert", "delete", "traverse_forward", "traverse_backward"],
        principle: "Nodes linked with both next and prev pointers.",
        description: "A linked list with bidirectional traversal capability.",
    },
    SeedConcept {
        key: "circular_linked_list",
        name: "Circular Linked List",
        kind: "linked_structure",
        category: "data_structure",
        basic_ops: &["insert", "delete", "loop_traverse"],
        principle: "Last node points back to head.",
        description: "A linked list where the last node links back to the first node.",
    },
    SeedConcept {
        key: "general_list",
        name: "General List",
        kind: "adt",
        category: "data_structure",
        basic_ops: &["insert", "delete", "search"],
        principle: "An abstract list supporting linear or non-linear storage.",
        description: "An abstract list structure with varying implementations.",
    },
    SeedConcept {
        key: "generalized_list",
        name: "Generalized List",
        kind: "nested_list",
        category: "data_structure",
        basic_ops: &["depth", "evaluate", "flatten"],
        principle: "List whose elements can be atoms or sub-lists.",
        description: "A recursive list structure composed of atoms and sublists.",
    },
    SeedConcept {
        key: "stack",
        name: "Stack",
        kind: "linear_structure",
        category: "data_structure",
        basic_ops: &["push", "pop", "top", "is_empty"],
        principle: "LIFO (Last-In-First-Out)",
        description: "A linear structure supporting LIFO access.",
    },
    SeedConcept {
        key: "queue",
        name: "Queue",
        kind: "linear_structure",
        category: "data_structure",
        basic_ops: &["enqueue", "dequeue", "front", "is_empty"],
        principle: "FIFO (First-In-First-Out)",
        description: "A linear structure supporting FIFO access.",
    },
    SeedConcept {
        key: "hash_table",
        name: "Hash Table",
        kind: "mapping_structure",
        category: "data_structure",
        basic_ops: &["insert", "delete", "search"],
        principle: "Maps keys to values using a hash function.",
        description: "An associative array using hashing and collision resolution.",
    },
    SeedConcept {
        key: "sparse_matrix",
        name: "Sparse Matrix",
        kind: "matrix_structure",
        category: "data_structure",
        basic_ops: &["store", "retrieve", "add", "multiply"],
        principle: "Optimized storage for matrices with many zeros.",
        description: "A matrix stored using compressed formats like COO or CSR.",
    },
    SeedConcept {
        key: "coo_format",
        name: "COO Format",
        kind: "sparse_representation",
        category: "data_structure",
        basic_ops: &["store", "iterate"],
        principle: "Stores triples (row, col, value).",
        description: "Sparse matrix representation using coordinate lists.",
    },
    SeedConcept {
        key: "csr_format",
        name: "CSR Format",
        kind: "sparse_representation",
        category: "data_structure",
        basic_ops: &["row_pointer", "compressed_storage"],
        principle: "Compressed Sparse Row representation.",
        description: "Efficient sparse matrix structure for row-wise operations.",
    },
    SeedConcept {
        key: "tree",
        name: "Tree",
        kind: "hierarchical_structure",
        category: "data_structure",
        basic_ops: &["traverse", "depth", "height"],
        principle: "Hierarchical structure of nodes and children.",
        description: "A non-linear structure consisting of nodes in parent-child relationships.",
    },
    SeedConcept {
        key: "binary_tree",
        name: "Binary Tree",
        kind: "tree_structure",
        category: "data_structure",
        basic_ops: &["preorder", "inorder", "postorder"],
        principle: "Each node has at most two children.",
        description: "A tree where each node has up to two children.",
    },
    SeedConcept {
        key: "bst",
        name: "Binary Search Tree",
        kind: "tree_structure",
        category: "data_structure",
        basic_ops: &["insert", "delete", "search"],
        principle: "Left subtree < root < right subtree.",
        description: "A binary tree supporting fast search operations.",
    },
    SeedConcept {
        key: "avl_tree",
        name: "AVL Tree",
        kind: "balanced_tree",
        category: "data_structure",
        basic_ops: &["rotate_LL", "rotate_RR", "rotate_LR", "rotate_RL"],
        principle: "Self-balancing BST with height constraints.",
        description: "A balanced BST ensuring logarithmic height.",
    },
    SeedConcept {
        key: "huffman_tree",
        name: "Huffman Tree",
        kind: "compression_tree",
        category: "data_structure",
        basic_ops: &["encode", "decode"],
        principle: "Optimal prefix coding.",
        description: "A tree used for optimal prefix-based compression.",
    },
    SeedConcept {
        key: "graph",
        name: "Graph",
        kind: "network_structure",
        category: "data_structure",
        basic_ops: &["add_vertex", "add_edge", "remove_vertex", "remove_edge"],
        principle: "Vertices connected via edges.",
        description: "A non-linear data structure representing relationships.",
    },
    SeedConcept {
        key: "adjacency_matrix",
        name: "Adjacency Matrix",
        kind: "graph_representation",
        category: "data_structure",
        basic_ops: &["edge_lookup", "update"],
        principle: "Matrix representation of graph edges.",
        description: "A 2D matrix used to represent edge connections.",
    },
    SeedConcept {
        key: "adjacency_list",
        name: "Adjacency List",
        kind: "graph_representation",
        category: "data_structure",
        basic_ops: &["traverse_neighbors"],
        principle: "Each vertex stores a list of neighbors.",
        description: "A memory-efficient graph representation.",
    },
    SeedConcept {
        key: "union_find",
        name: "Union-Find",
        kind: "disjoint_set_structure",
        category: "data_structure",
        basic_ops: &["find", "union"],
        principle: "Partition data into disjoint subsets.",
        description: "A structure used for connectivity and MST algorithms.",
    },
    SeedConcept {
        key: "linear_search",
        name: "Linear Search",
        kind: "search_algorithm",
        category: "algorithm",
        basic_ops: &["scan"],
        principle: "Sequential search over elements.",
        description: "A simple search algorithm that scans elements one by one.",
    },
    SeedConcept {
        key: "binary_search",
        name: "Binary Search",
        kind: "search_algorithm",
        category: "algorithm",
        basic_ops: &["mid_compare", "divide"],
        principle: "Divide search space by half.",
        description: "Efficient search on sorted arrays.",
    },
    SeedConcept {
        key: "bubble_sort",
        name: "Bubble Sort",
        kind: "sorting_algorithm",
        category: "algorithm",
        basic_ops: &["swap", "compare"],
        principle: "Repeatedly swap adjacent elements if out of order.",
        description: "Simple but inefficient sorting method.",
    },
    SeedConcept {
        key: "merge_sort",
        name: "Merge Sort",
        kind: "sorting_algorithm",
        category: "algorithm",
        basic_ops: &["split", "merge"],
        principle: "Divide-and-conquer sorting algorithm.",
        description: "Efficient stable sorting method using recursion.",
    },
    SeedConcept {
        key: "quick_sort",
        name: "Quick Sort",
        kind: "sorting_algorithm",
        category: "algorithm",
        basic_ops: &["partition", "recursive_sort"],
        principle: "Divide around pivot element.",
        description: "Fast divide-and-conquer sorting method.",
    },
    SeedConcept {
        key: "bfs",
        name: "Breadth-First Search",
        kind: "graph_algorithm",
        category: "algorithm",
        basic_ops: &["enqueue", "visit"],
        principle: "Level-order exploration.",
        description: "Graph traversal visiting nodes in breadth-first order.",
    },
    SeedConcept {
        key: "dfs",
        name: "Depth-First Search",
        kind: "graph_algorithm",
        category: "algorithm",
        basic_ops: &["push", "visit"],
        principle: "Explore depth first.",
        description: "Graph traversal exploring depth-first paths.",
    },
    SeedConcept {
        key: "dijkstra",
        name: "Dijkstra Algorithm",
        kind: "shortest_path_algorithm",
        category: "algorithm",
        basic_ops: &["relax", "extract_min"],
        principle: "Find shortest paths with non-negative weights.",
        description: "Algorithm computing minimal distances from source.",
    },
    SeedConcept {
        key: "bellman_ford",
        name: "Bellman-Ford Algorithm",
        kind: "shortest_path_algorithm",
        category: "algorithm",
        basic_ops: &["relax"],
        principle: "Handles negative weights.",
        description: "Algorithm computing shortest paths including negative weights.",
    },
    SeedConcept {
        key: "recursion",
        name: "Recursion",
        kind: "programming_technique",
        category: "algorithm",
        basic_ops: &["call", "base_case"],
        principle: "Function calling itself.",
        description: "A method where a function solves a problem by calling itself.",
    },
    SeedConcept {
        key: "factorial_recursive",
        name: "Recursive Factorial",
        kind: "recursive_algorithm",
        category: "algorithm",
        basic_ops: &["call", "multiply"],
        principle: "n! = n * (n-1)!",
        description: "Classic recursive definition of factorial.",
    },
    SeedConcept {
        key: "fibonacci_recursive",
        name: "Recursive Fibonacci",
        kind: "recursive_algorithm",
        category: "algorithm",
        basic_ops: &["call", "sum"],
        principle: "fib(n) = fib(n-1) + fib(n-2)",
        description: "Tree-shaped recursive computation of Fibonacci numbers.",
    },
];
