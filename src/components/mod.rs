pub mod dendrogram;
