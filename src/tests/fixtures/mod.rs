pub mod state;

pub mod workshops {
    pub mod workshop_builder;
}
