mod support;

mod tab_cycling;
