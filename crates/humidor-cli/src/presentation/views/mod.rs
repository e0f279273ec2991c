// Text views: one private Display struct per view model, built through
// `CreateView`. Colours come from the palette handed in by the renderer.

mod cigar;
mod dashboard;
mod humidor;
mod journal;
mod system;
mod transfer;
