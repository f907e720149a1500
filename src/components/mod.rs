pub mod skill_graph;
