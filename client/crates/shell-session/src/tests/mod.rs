mod action_result;
