pub mod modules{
    pub mod error;
    pub mod univariate_poly;
    pub mod eval;
    pub mod division;
    mod proptests;
}
