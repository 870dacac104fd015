mod match_stage_cases;
mod oracle_fetch_tests;
