mod helpers;
mod influencers;
mod selection;
